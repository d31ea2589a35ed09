//! Random program generation
//!
//! Programs are built one instruction at a time: an opcode from 1-18 (`noop`
//! is never generated) followed by `arity` operands in 0-9, until the target
//! length is reached. The final instruction is always completed, so a program
//! can overshoot its target by up to [`MAX_ARITY`] words; targets are capped so
//! that the overshoot still fits in the buffer capacity.

use std::time::{SystemTime, UNIX_EPOCH};

use nix::time::{clock_gettime, ClockId};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore as _, SeedableRng as _};
use stackvm_spec::{Opcode, Program, Word, MAX_ARITY};

use crate::config::MIN_PROGRAM_LEN;

/// Lowest and highest generated opcode
const FIRST_OPCODE: Word = Opcode::Iadd as Word;
const LAST_OPCODE: Word = Opcode::Halt as Word;

/// Operands are drawn from `0..OPERAND_RANGE`
const OPERAND_RANGE: u32 = 10;

/// Wall-clock seconds plus process CPU time in microseconds.
///
/// Not reproducible across runs.
pub fn entropy_seed() -> u64 {
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let cpu = clock_gettime(ClockId::CLOCK_PROCESS_CPUTIME_ID)
        .map(|ts| (ts.tv_sec() as u64) * 1_000_000 + (ts.tv_nsec() as u64) / 1_000)
        .unwrap_or(0);
    wall.wrapping_add(cpu)
}

/// Target word count for a seed: `seed % capacity`, lifted by the minimum
/// length when it falls short of it, and capped at `capacity - MAX_ARITY`.
///
/// The minimum length wins over the cap for capacities too small to hold both.
pub fn target_len(seed: u64, capacity: usize) -> usize {
    let len = (seed % capacity.max(1) as u64) as usize;
    let len = if len < MIN_PROGRAM_LEN {
        len + MIN_PROGRAM_LEN
    } else {
        len
    };
    let limit = capacity.saturating_sub(MAX_ARITY).max(MIN_PROGRAM_LEN);
    len.min(limit)
}

/// Generate one program from a seed
pub fn generate(seed: u64, capacity: usize) -> Program {
    let target = target_len(seed, capacity);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut program = Program::with_capacity(target + MAX_ARITY);

    while program.len() < target {
        let span = (LAST_OPCODE - FIRST_OPCODE + 1) as u32;
        let word = FIRST_OPCODE + (rng.next_u32() % span) as Word;
        program.push(word);

        let arity = Opcode::from_word(word).map_or(0, Opcode::arity);
        for _ in 0..arity {
            program.push((rng.next_u32() % OPERAND_RANGE) as Word);
        }
    }

    program
}

/// Per-round seeds for a fuzz run
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Fresh wall clock + CPU time every round
    Entropy,
    /// Deterministic sequence derived from one seed
    Fixed(ChaCha20Rng),
}

impl SeedSource {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SeedSource::Fixed(ChaCha20Rng::seed_from_u64(seed)),
            None => SeedSource::Entropy,
        }
    }

    pub fn next_seed(&mut self) -> u64 {
        match self {
            SeedSource::Entropy => entropy_seed(),
            SeedSource::Fixed(rng) => rng.next_u64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walk instruction boundaries, returning the opcodes found there
    fn opcodes(program: &Program) -> Vec<Word> {
        let words = program.words();
        let mut found = Vec::new();
        let mut i = 0;
        while i < words.len() {
            found.push(words[i]);
            i += 1 + Opcode::from_word(words[i]).map_or(0, Opcode::arity);
        }
        found
    }

    #[test]
    fn test_target_len_floor() {
        assert_eq!(target_len(0, 128), 10);
        assert_eq!(target_len(9, 128), 19);
        assert_eq!(target_len(10, 128), 10);
        assert_eq!(target_len(125, 128), 125);
        assert_eq!(target_len(127, 128), 125);
        assert_eq!(target_len(128, 128), 10);
        assert_eq!(target_len(133, 128), 15);
    }

    #[test]
    fn test_target_len_small_capacity() {
        assert_eq!(target_len(12, 13), 10);
        assert_eq!(target_len(5, 13), 10);
        assert_eq!(target_len(3, 4), 10);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        assert_eq!(generate(42, 128), generate(42, 128));
    }

    #[test]
    fn test_seed_source_fixed_repeats() {
        let mut a = SeedSource::new(Some(5));
        let mut b = SeedSource::new(Some(5));
        for _ in 0..8 {
            assert_eq!(a.next_seed(), b.next_seed());
        }
    }

    #[test]
    fn test_entropy_seed_is_nonzero() {
        assert!(entropy_seed() > 0);
    }

    proptest! {
        #[test]
        fn test_generated_length(seed in any::<u64>()) {
            let program = generate(seed, 128);
            let target = target_len(seed, 128);
            prop_assert!(program.len() >= 10);
            prop_assert!(program.len() >= target);
            prop_assert!(program.len() <= target + MAX_ARITY);
            prop_assert!(program.len() <= 128);
        }

        #[test]
        fn test_generated_length_fits_capacity(seed in any::<u64>(), capacity in 13usize..512) {
            prop_assert!(generate(seed, capacity).len() <= capacity);
        }

        #[test]
        fn test_generated_opcodes(seed in any::<u64>()) {
            let program = generate(seed, 128);
            for opcode in opcodes(&program) {
                prop_assert!((1..=18).contains(&opcode));
            }
        }

        #[test]
        fn test_generated_operands_are_small(seed in any::<u64>()) {
            let program = generate(seed, 128);
            let words = program.words();
            let mut i = 0;
            while i < words.len() {
                let arity = Opcode::from_word(words[i]).map_or(0, Opcode::arity);
                prop_assert!(i + arity < words.len());
                for operand in &words[i + 1..=i + arity] {
                    prop_assert!((0..=9).contains(operand));
                }
                i += 1 + arity;
            }
        }
    }
}
