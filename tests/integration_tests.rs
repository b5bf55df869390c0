mod test_demo {
    use prng_demo::demo::{self, EXAMPLE_HIGH, EXAMPLE_LOW, REPETITIONS};
    use prng_demo::SeededRng;

    fn run_with_seed(seed: u64) -> Vec<String> {
        let mut out = Vec::new();
        let mut rng = SeededRng::new(seed);
        demo::run(&mut out, &mut rng).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_line_count() {
        assert_eq!(run_with_seed(1).len(), 2 * REPETITIONS + 2);
    }

    #[test]
    fn test_first_block_is_pinned_for_seed_one() {
        let lines = run_with_seed(1);
        assert_eq!(lines[1], "908834774");
        assert_eq!(lines[2], "1093944153");
        assert_eq!(lines[3], "1392341196");
    }

    #[test]
    fn test_second_block_stays_within_example_interval() {
        let lines = run_with_seed(7);
        for line in &lines[REPETITIONS + 2..] {
            let v: i32 = line.parse().unwrap();
            assert!((EXAMPLE_LOW..=EXAMPLE_HIGH).contains(&v));
        }
    }

    #[test]
    fn test_first_block_values_parse_as_integers() {
        let lines = run_with_seed(7);
        for line in &lines[1..REPETITIONS + 1] {
            let v: i32 = line.parse().unwrap();
            assert!(v >= 0);
        }
    }
}

mod test_rng {
    use prng_demo::{RangeError, SeededRng};

    #[test]
    fn test_inverted_range_reports_an_error() {
        let mut rng = SeededRng::new(1);
        let err = rng.next_in_range(300, 200).unwrap_err();
        assert_eq!(
            err,
            RangeError::Empty {
                low: 300,
                high: 200
            }
        );
    }

    #[test]
    fn test_error_message_names_both_bounds() {
        let mut rng = SeededRng::new(1);
        let err = rng.next_in_range(300, 200).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("200"));
    }
}
