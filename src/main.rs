//! A command driver for [`SinglyLinkedList`], reading whitespace-separated commands from stdin:
//!
//! - `create_int` / `create_str`: start a new list of integers or strings.
//! - `add <pos> <value>`: insert `value` at `pos`, clamped to the end of the list.
//! - `remove <pos>`: remove the element at `pos`, clamped to the last element.
//! - `print`: write the list on one line, separated by spaces.
//! - `free`: release the list and stop.
//!
//! Commands given before a list is created, and arguments which fail to parse, are ignored.

use std::io::{self, BufWriter, Read, Write};
use std::str::SplitWhitespace;

use linked_containers::collections::linked::SinglyLinkedList;

enum Session {
    Idle,
    Ints(SinglyLinkedList<i64>),
    Strs(SinglyLinkedList<String>),
}

fn main() -> io::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut out = BufWriter::new(io::stdout().lock());
    run(&input, &mut out)?;
    out.flush()
}

fn run<W: Write>(input: &str, out: &mut W) -> io::Result<()> {
    let mut session = Session::Idle;
    let mut tokens = input.split_whitespace();

    while let Some(command) = tokens.next() {
        match command {
            "create_int" => session = Session::Ints(SinglyLinkedList::new()),
            "create_str" => session = Session::Strs(SinglyLinkedList::new()),
            "add" => {
                let (Some(pos), Some(value)) = (next_index(&mut tokens), tokens.next()) else {
                    continue;
                };
                match &mut session {
                    Session::Idle => {},
                    Session::Ints(list) => {
                        if let Ok(value) = value.parse() {
                            list.insert(pos, value);
                        }
                    },
                    Session::Strs(list) => list.insert(pos, value.to_owned()),
                }
            },
            "remove" => {
                let Some(pos) = next_index(&mut tokens) else {
                    continue;
                };
                match &mut session {
                    Session::Idle => {},
                    Session::Ints(list) => drop(list.remove(pos)),
                    Session::Strs(list) => drop(list.remove(pos)),
                }
            },
            "print" => match &session {
                Session::Idle => {},
                Session::Ints(list) => writeln!(out, "{list}")?,
                Session::Strs(list) => writeln!(out, "{list}")?,
            },
            "free" => break,
            _ => {},
        }
    }

    Ok(())
}

fn next_index(tokens: &mut SplitWhitespace<'_>) -> Option<usize> {
    tokens.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(input: &str) -> String {
        let mut out = Vec::new();
        assert!(run(input, &mut out).is_ok());
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_int_session() {
        let input = "create_int add 0 5 add 0 3 add 5 9 print remove 1 print free";
        assert_eq!(run_to_string(input), "3 5 9\n3 9\n");
    }

    #[test]
    fn test_str_session() {
        let input = "create_str\nadd 0 world\nadd 0 hello\nadd 9 !\nprint\nremove 7\nprint\nfree\n";
        assert_eq!(run_to_string(input), "hello world !\nhello world\n");
    }

    #[test]
    fn test_ignored_commands() {
        let input = "print add 0 1 create_int add x 2 add 0 y add 0 4 remove z print free print";
        assert_eq!(
            run_to_string(input),
            "4\n",
            "Commands before create and unparseable arguments should be ignored."
        );
    }
}
