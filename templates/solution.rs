// Contest solution skeleton. Build with `rustc -O solution.rs` and run
// `./solution < input.txt`. Only `solve` changes between problems.

#![allow(dead_code, unused_macros)]

use std::io::{self, BufRead, BufWriter, Write};

const MOD: i64 = 1_000_000_007;
const INF: i64 = i64::MAX / 4;

/// Set to true when a judge cares about multiple test cases.
const MULTI_CASE: bool = false;

macro_rules! debug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            eprintln!("DEBUG: {}", format!($($arg)*));
        }
    };
}

struct Scanner<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Scanner<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next<T: std::str::FromStr>(&mut self) -> T {
        loop {
            if let Some(token) = self.pending.pop() {
                return token.parse().ok().expect("malformed token");
            }
            let mut line = String::new();
            let read = self.reader.read_line(&mut line).expect("read failed");
            assert!(read > 0, "unexpected end of input");
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }

    fn next_n<T: std::str::FromStr>(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.next()).collect()
    }
}

fn solve<R: BufRead, W: Write>(sc: &mut Scanner<R>, out: &mut W) {
    let n: usize = sc.next();
    let mut arr: Vec<i64> = sc.next_n(n);
    debug!("n={} arr={:?}", n, arr);

    arr.sort_unstable();
    let line = arr
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line).unwrap();
}

fn main() {
    let stdin = io::stdin();
    let mut sc = Scanner::new(stdin.lock());
    let mut out = BufWriter::new(io::stdout().lock());

    let t: usize = if MULTI_CASE { sc.next() } else { 1 };
    for _ in 0..t {
        solve(&mut sc, &mut out);
    }
}
