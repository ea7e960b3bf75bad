use {
    pagesim::{
        Policy,
        ReferenceString,
        Session,
        SimError,
        input::{MAX_GENERATED_LEN, parse_capacity, parse_length, random_reference_string},
    },
    rand::{SeedableRng, rngs::StdRng},
};

#[test]
fn step_through_each_policy() {
    let mut session = Session::new();
    let expected = [(Policy::Fifo, 10), (Policy::Lru, 9), (Policy::Optimal, 7)];

    for (policy, faults) in expected {
        session.select(policy);
        let mut step = session.start_str("7 0 1 2 0 3 0 4 2 3 0 3 2", 3).unwrap();
        while !step.completed {
            step = session.advance().unwrap();
        }
        assert_eq!(step.faults, faults, "{policy}");
        assert_eq!(session.simulator(policy).faults(), faults);
    }

    // Each policy keeps its own run.
    assert!(session.simulator(Policy::Fifo).is_completed());
    assert_eq!(session.simulator(Policy::Fifo).faults(), 10);
}

#[test]
fn text_inputs() {
    let mut session = Session::new();
    session.select("lru".parse().unwrap());

    let capacity = parse_capacity("2").unwrap();
    let step = session.start_str("a b a", capacity).unwrap();
    assert_eq!(step.page, "a");

    assert_eq!(parse_capacity("-2"), Err(SimError::InvalidCapacity("-2".to_owned())));
    assert_eq!(parse_capacity("abc"), Err(SimError::InvalidCapacity("abc".to_owned())));

    // Invalid input leaves the selected simulator idle.
    assert_eq!(session.start_str("", capacity), Err(SimError::EmptyReferenceString));
    assert!(session.advance().is_none());
}

#[test]
fn generated_reference_string() {
    let len = parse_length("12").unwrap();
    let refs = random_reference_string(&mut StdRng::seed_from_u64(1), len).unwrap();
    assert_eq!(refs.len(), MAX_GENERATED_LEN);

    let mut session = Session::new();
    session.select(Policy::Optimal);
    let mut step = session.start(refs.clone(), 3).unwrap();
    let mut seen = vec![step.page.clone()];
    while let Some(next) = session.advance() {
        if next.completed && next.index == step.index {
            break;
        }
        step = next;
        seen.push(step.page.clone());
    }
    assert_eq!(ReferenceString::new(seen), refs);
}

#[test]
fn clear() {
    let mut session: Session = Session::new();
    session.select(Policy::Fifo);
    session.start_str("1 2 3", 1).unwrap();

    session.clear();
    assert_eq!(session.selected(), None);
    assert_eq!(session.start_str("1", 1), Err(SimError::NoPolicySelected));
    for policy in Policy::ALL {
        assert_eq!(session.simulator(policy).faults(), 0);
        assert!(!session.simulator(policy).is_completed());
    }
}
