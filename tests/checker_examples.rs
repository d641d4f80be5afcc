use push_swap::prelude::*;

#[test]
fn swapped_pair_is_ok() {
    assert_eq!(check(&[2, 1], "sa\n".as_bytes()), Ok(Verdict::Ok));
}

#[test]
fn empty_program_on_sorted_input_is_ok() {
    assert_eq!(check(&[1, 2], "".as_bytes()), Ok(Verdict::Ok));
}

#[test]
fn swap_on_sorted_triple_is_ko() {
    assert_eq!(check(&[1, 2, 3], "sa\n".as_bytes()), Ok(Verdict::Ko));
}

#[test]
fn leftover_b_is_ko() {
    assert_eq!(check(&[1, 2, 3], "pb\npb\npb\n".as_bytes()), Ok(Verdict::Ko));
}

#[test]
fn noops_are_harmless() {
    // pa on empty B, sb/rb/rrb on empty B: nothing changes.
    assert_eq!(check(&[1, 2], "pa\nsb\nrb\nrrb\n".as_bytes()), Ok(Verdict::Ok));
}

#[test]
fn every_token_is_recognised() {
    let all = "sa\nsb\nss\npa\npb\nra\nrb\nrr\nrra\nrrb\nrrr\n";
    assert!(check(&[5, 4, 3, 2, 1], all.as_bytes()).is_ok());
}

#[test]
fn malformed_instruction_stops_replay() {
    let err = check(&[2, 1], "sa\nswap\n".as_bytes()).unwrap_err();
    assert_eq!(
        err,
        PushSwapError::MalformedInstruction { line: 2, token: "swap".into() }
    );
    assert_eq!(err.to_string(), "Malformed instruction on line 2: `swap`");
}

#[test]
fn parse_then_check() {
    let values = parse_args(["3 2", "1"]).unwrap();
    let ops = sort_operations(&values);
    let text: String = ops.iter().map(|op| format!("{op}\n")).collect();
    assert_eq!(check(&values, text.as_bytes()), Ok(Verdict::Ok));
}

#[test]
fn duplicate_input_rejected_before_core() {
    assert_eq!(parse_args(["1 2 1"]), Err(PushSwapError::DuplicateValue(1)));
}
