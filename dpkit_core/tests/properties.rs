//! Property-based tests for the reduction solver and the Morse decoder.

use num_traits::Zero;
use proptest::prelude::*;

use dpkit_core::morse::{count_decodings, Decoder, SymbolTable, TableMode};
use dpkit_core::reduce::{
    is_terminal, min_ops_memo, min_ops_naive, min_ops_table, optimal_path, replay,
};

/// Strategy: one of the four table modes.
fn mode_strategy() -> impl Strategy<Value = TableMode> {
    prop::sample::select(TableMode::ALL.to_vec())
}

/// Strategy: a short whitespace-free Morse segment.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[.-]{1,12}"
}

proptest! {
    // 1. All three strategies agree
    #[test]
    fn strategies_agree(n in 0u64..2_000) {
        let naive = min_ops_naive(n);
        prop_assert_eq!(naive, min_ops_memo(n));
        prop_assert_eq!(naive, min_ops_table(n));
    }

    // 2. Zero moves exactly at terminal states
    #[test]
    fn zero_iff_terminal(n in 0u64..5_000) {
        prop_assert_eq!(min_ops_table(n) == 0, n <= 1 || n % 7 == 0);
    }

    // 3. The reconstructed path is optimal and ends at a terminal state
    #[test]
    fn path_is_optimal_and_terminates(n in 0u64..5_000) {
        let path = optimal_path(n);
        prop_assert_eq!(path.len() as u64, min_ops_table(n));

        let end = replay(n, &path);
        prop_assert!(end.is_some(), "invalid move in path for n={n}");
        prop_assert!(end.is_some_and(is_terminal), "n={n} ended at {end:?}");
    }

    // 4. Joining two segments with whitespace multiplies their counts
    #[test]
    fn segments_multiply(a in segment_strategy(), b in segment_strategy(), mode in mode_strategy()) {
        let decoder = Decoder::new(mode);
        let ca = decoder.count_segment(&a);
        let cb = decoder.count_segment(&b);
        let joined = decoder.count(&format!("{a} \t {b}"));
        prop_assert_eq!(joined.total, ca * cb);
    }

    // 5. Extra whitespace never changes the result
    #[test]
    fn whitespace_runs_are_one_break(a in segment_strategy(), b in segment_strategy()) {
        let tight = count_decodings(&format!("{a} {b}"), TableMode::Full);
        let loose = count_decodings(&format!("  {a}\n\n   {b}  "), TableMode::Full);
        prop_assert_eq!(tight, loose);
    }

    // 6. Concatenating two codes from the table always decodes
    #[test]
    fn code_pairs_decode(mode in mode_strategy(), i in any::<prop::sample::Index>(), j in any::<prop::sample::Index>()) {
        let table = SymbolTable::builtin(mode);
        let codes: Vec<&str> = table.codes().into_iter().collect();
        let message = format!("{}{}", i.get(&codes), j.get(&codes));
        let decoding = count_decodings(&message, mode);
        prop_assert!(!decoding.total.is_zero(), "{message} in {mode}");
    }
}

#[test]
fn every_code_round_trips_in_every_mode() {
    for mode in TableMode::ALL {
        let table = SymbolTable::builtin(mode);
        for (symbol, code) in table.iter() {
            let decoding = count_decodings(code, mode);
            assert!(!decoding.total.is_zero(), "{} ({}) in {}", symbol, code, mode);
            assert!(table.decode_symbol(code).contains(&symbol));
        }
    }
}
