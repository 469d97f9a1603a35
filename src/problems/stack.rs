//! String problems solved with a [`Stack`].

use crate::collections::adapters::Stack;

/// Drains a stack of characters into a string, bottom first.
fn collect_bottom_up(stack: Stack<char>) -> String {
    let mut chars = stack.into_iter().collect::<Vec<_>>();
    chars.reverse();
    chars.into_iter().collect()
}

/// Returns the smallest number that can be formed by removing `k` digits from `num`, keeping the
/// order of the remaining digits. Leading zeros are stripped, and `"0"` is returned if no digits
/// remain, so the result is always a valid number and never an empty string.
///
/// Every digit is pushed once, but first any larger digits on top of the stack are popped while
/// removals are left, so the stack always holds a non-decreasing prefix.
///
/// # Examples
/// ```
/// # use linked_containers::problems::remove_k_digits;
/// assert_eq!(remove_k_digits("1432219", 3), "1219");
/// assert_eq!(remove_k_digits("10200", 1), "200");
/// assert_eq!(remove_k_digits("10", 2), "0");
/// ```
pub fn remove_k_digits(num: &str, k: usize) -> String {
    let mut stack = Stack::new();
    let mut remaining = k;

    for digit in num.chars() {
        while remaining > 0 && stack.peek().is_some_and(|&top| top > digit) {
            stack.pop();
            remaining -= 1;
        }
        stack.push(digit);
    }

    // The rest of the stack is non-decreasing, so the largest digits are on top.
    while remaining > 0 && stack.pop().is_some() {
        remaining -= 1;
    }

    let digits = collect_bottom_up(stack);
    match digits.trim_start_matches('0') {
        "" => String::from("0"),
        trimmed => trimmed.to_owned(),
    }
}

/// Repeatedly removes runs of `k` equal adjacent characters from `s` until none are left.
///
/// The stack holds each run as a character and its count. A run is popped as soon as its count
/// reaches `k`, which lets the runs on either side of it meet. A `k` of 0 removes nothing.
///
/// # Examples
/// ```
/// # use linked_containers::problems::remove_k_duplicates;
/// assert_eq!(remove_k_duplicates("deeedbbcccbdaa", 3), "aa");
/// assert_eq!(remove_k_duplicates("abcd", 2), "abcd");
/// ```
pub fn remove_k_duplicates(s: &str, k: usize) -> String {
    if k == 0 {
        return s.to_owned();
    }

    let mut stack = Stack::<(char, usize)>::new();
    for ch in s.chars() {
        match stack.peek_mut() {
            Some((top, count)) if *top == ch => *count += 1,
            _ => stack.push((ch, 1)),
        }

        if stack.peek().is_some_and(|&(_, count)| count == k) {
            stack.pop();
        }
    }

    let mut runs = stack.into_iter().collect::<Vec<_>>();
    runs.reverse();
    runs.into_iter()
        .flat_map(|(ch, count)| std::iter::repeat_n(ch, count))
        .collect()
}

/// Collapses a row of coloured balls. Any run of two or more equal characters vanishes, and a
/// single character that matches the top of the stack annihilates with it.
///
/// # Examples
/// ```
/// # use linked_containers::problems::zuma;
/// assert_eq!(zuma("abbbac"), "c");
/// assert_eq!(zuma("abc"), "abc");
/// ```
pub fn zuma(s: &str) -> String {
    let mut stack = Stack::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        let mut run = false;
        while chars.next_if_eq(&ch).is_some() {
            run = true;
        }
        if run {
            continue;
        }

        if stack.peek() == Some(&ch) {
            stack.pop();
        } else {
            stack.push(ch);
        }
    }

    collect_bottom_up(stack)
}

/// Returns true if every bracket in `s` is closed by a matching bracket, in the correct order.
/// Characters other than `()[]{}` are ignored.
///
/// # Examples
/// ```
/// # use linked_containers::problems::is_balanced;
/// assert!(is_balanced("{[()()]}"));
/// assert!(!is_balanced("([)]"));
/// assert!(!is_balanced("(("));
/// ```
pub fn is_balanced(s: &str) -> bool {
    let mut stack = Stack::new();

    for ch in s.chars() {
        match ch {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return false;
                }
            },
            _ => {},
        }
    }

    stack.is_empty()
}
