//! Console front end that populates two sets from whitespace-separated integers and runs one
//! operation on them.
//!
//! The input holds, in order: the backend tag, the number of keys in `A`, the number of keys in
//! `B`, the keys of `A`, the keys of `B`, the operation code and, for codes `1` and `4`, a key.

use crate::error::{Error, Result};
use crate::set::{self, Backend, Set};
use std::str::SplitWhitespace;

const MAX_RESERVED_KEYS: usize = 1024;

/// An enum representing the operation requested by the last part of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Contains(i32),
    Union,
    Intersection,
    Remove(i32),
    Invalid(i32),
}

/// A parsed invocation of the console program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub backend: Backend,
    pub a: Vec<i32>,
    pub b: Vec<i32>,
    pub operation: Operation,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
    {
        let token = self
            .inner
            .next()
            .ok_or_else(|| Error::MalformedInput(format!("missing {}", what)))?;
        token
            .parse()
            .map_err(|_| Error::MalformedInput(format!("invalid {} `{}`", what, token)))
    }

    // The count comes from the input, so only a bounded amount is reserved up front.
    fn keys(&mut self, len: usize, what: &str) -> Result<Vec<i32>> {
        let mut ret = Vec::with_capacity(len.min(MAX_RESERVED_KEYS));
        for _ in 0..len {
            ret.push(self.next(what)?);
        }
        Ok(ret)
    }
}

impl Program {
    /// Parses the whole input of the console program.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::driver::{Operation, Program};
    /// use balanced_set::Backend;
    ///
    /// let program = Program::parse("1\n2 1\n4 5\n5\n3\n").unwrap();
    /// assert_eq!(program.backend, Backend::Llrb);
    /// assert_eq!(program.a, vec![4, 5]);
    /// assert_eq!(program.b, vec![5]);
    /// assert_eq!(program.operation, Operation::Intersection);
    /// ```
    pub fn parse(input: &str) -> Result<Program> {
        let mut tokens = Tokens {
            inner: input.split_whitespace(),
        };

        let backend = Backend::from_tag(tokens.next("backend tag")?)?;
        let a_len = tokens.next("size of A")?;
        let b_len = tokens.next("size of B")?;
        let a = tokens.keys(a_len, "key of A")?;
        let b = tokens.keys(b_len, "key of B")?;

        let operation = match tokens.next("operation code")? {
            1 => Operation::Contains(tokens.next("key")?),
            2 => Operation::Union,
            3 => Operation::Intersection,
            4 => Operation::Remove(tokens.next("key")?),
            code => Operation::Invalid(code),
        };

        Ok(Program {
            backend,
            a,
            b,
            operation,
        })
    }

    /// Builds both sets, runs the operation and returns the text the console program prints.
    pub fn run(&self) -> String {
        let mut a = Some(Set::from_keys(self.backend, self.a.iter().cloned()));
        let mut b = Some(Set::from_keys(self.backend, self.b.iter().cloned()));
        let mut output = String::new();

        match self.operation {
            Operation::Contains(key) => {
                if set::contains(a.as_ref(), key) {
                    output.push_str("Pertence\n");
                } else {
                    output.push_str("Nao pertence\n");
                }
            },
            Operation::Union => {
                let mut ret = set::union(a.as_ref(), b.as_ref());
                write_set(&mut output, ret.as_ref());
                set::destroy(&mut ret);
            },
            Operation::Intersection => {
                let mut ret = set::intersection(a.as_ref(), b.as_ref());
                write_set(&mut output, ret.as_ref());
                set::destroy(&mut ret);
            },
            Operation::Remove(key) => {
                if set::remove(a.as_mut(), key) {
                    output.push_str(&format!("Elemento {} removido do conjunto A.\n", key));
                } else {
                    output.push_str(&format!("Elemento {} nao encontrado no conjunto A.\n", key));
                }
                write_set(&mut output, a.as_ref());
            },
            Operation::Invalid(code) => {
                warn!("invalid operation code {}", code);
                output.push_str("Opcao invalida.\n");
            },
        }

        set::destroy(&mut a);
        set::destroy(&mut b);
        output
    }
}

fn write_set(output: &mut String, set: Option<&Set>) {
    match set {
        Some(set) => output.push_str(&set.to_string()),
        None => output.push_str("Arvore vazia."),
    }
    output.push('\n');
}
