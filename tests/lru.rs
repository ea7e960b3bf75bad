use pagesim::{
    FifoSimulator,
    FrameRole,
    FrameSlot,
    LruSimulator,
    PagingSimulator,
    ReferenceString,
    SimError,
    input::parse_capacity,
    simulate,
};

fn refs(input: &str) -> ReferenceString<String> {
    ReferenceString::from(input)
}

#[test]
fn textbook_trace() {
    let mut sim = LruSimulator::new();
    let steps = simulate(&mut sim, refs("7 0 1 2 0 3 0 4 2 3 0 3 2"), 3).unwrap();
    assert_eq!(steps.len(), 13);

    let pattern: String = steps.iter().map(|s| if s.hit { 'H' } else { 'M' }).collect();
    assert_eq!(pattern, "MMMMHMHMMMMHH");

    let evicted: Vec<_> = steps.iter().filter_map(|s| s.evicted.as_deref()).collect();
    assert_eq!(evicted, ["7", "1", "2", "3", "0", "4"]);

    assert_eq!(sim.faults(), 9);

    // Victims give up their slots, so the frames do not shift.
    assert_eq!(sim.resident(), ["0", "3", "2"]);
    assert_eq!(sim.recency(), ["0", "3", "2"]);
}

#[test]
fn hit_refreshes_recency() {
    let mut sim = LruSimulator::new();
    simulate(&mut sim, refs("1 2 3 1 4"), 3).unwrap();

    // FIFO would have evicted 1 here.
    assert_eq!(sim.resident(), ["1", "4", "3"]);

    let fifo = simulate(&mut FifoSimulator::new(), refs("1 2 3 1 4"), 3).unwrap();
    assert_eq!(fifo.last().unwrap().evicted.as_deref(), Some("1"));
}

#[test]
fn before_view_marks_least_recent() {
    let mut sim = LruSimulator::new();
    sim.start(refs("7 0 1 2 0 3"), 3).unwrap();
    sim.advance().unwrap();
    sim.advance().unwrap();

    let step = sim.advance().unwrap();
    assert_eq!(step.page, "2");
    assert_eq!(step.evicted.as_deref(), Some("7"));
    assert_eq!(step.frames_before, vec![
        FrameSlot::new("7".to_string(), FrameRole::Evicted),
        FrameSlot::new("0".to_string(), FrameRole::Normal),
        FrameSlot::new("1".to_string(), FrameRole::Normal),
    ]);
    assert_eq!(step.frames_after, vec![
        FrameSlot::new("2".to_string(), FrameRole::Inserted),
        FrameSlot::new("0".to_string(), FrameRole::Normal),
        FrameSlot::new("1".to_string(), FrameRole::Normal),
    ]);

    let step = sim.advance().unwrap();
    assert!(step.hit);
    assert_eq!(step.frames_before[1].role, FrameRole::Hit);
    assert_eq!(step.frames_after[1].role, FrameRole::Hit);
    assert_eq!(sim.recency(), ["1", "2", "0"]);

    // Least recently used is 1, even though 2 was inserted later than 0.
    let step = sim.advance().unwrap();
    assert_eq!(step.evicted.as_deref(), Some("1"));
    assert_eq!(step.frames_before[2].role, FrameRole::Evicted);
    assert_eq!(sim.resident(), ["2", "0", "3"]);
    assert!(step.completed);
}

#[test]
fn integer_pages() {
    let mut sim = LruSimulator::new();
    let steps = simulate(&mut sim, ReferenceString::new(vec![1u32, 2, 1, 3, 2]), 2).unwrap();
    let faults: Vec<_> = steps.iter().map(|s| s.faults).collect();
    assert_eq!(faults, [1, 2, 2, 3, 4]);
    assert_eq!(sim.resident(), [2, 3]);
}

#[test]
fn completion_is_idempotent() {
    let mut sim = LruSimulator::new();
    let last = simulate(&mut sim, refs("1 2 1"), 2).unwrap().pop().unwrap();
    for _ in 0..3 {
        assert_eq!(sim.advance(), Some(last.clone()));
    }
    assert_eq!(sim.recency(), ["2", "1"]);
    assert_eq!(sim.faults(), 2);
}

#[test]
fn restart_discards_previous_run() {
    let mut sim = LruSimulator::new();
    simulate(&mut sim, refs("1 2 3 4"), 2).unwrap();

    let step = sim.start(refs("4 4"), 2).unwrap();
    assert!(!step.hit);
    assert_eq!(step.faults, 1);
    assert_eq!(sim.recency(), ["4"]);

    assert_eq!(sim.start(refs(""), 2), Err(SimError::EmptyReferenceString));
    assert!(sim.recency().is_empty());
    assert!(sim.advance().is_none());
}

#[test]
fn capacity_beyond_reference_string() {
    // Scenario: every distinct page fits, so only first references fault.
    let mut sim = LruSimulator::new();
    let steps = simulate(&mut sim, ReferenceString::from(vec![1u8, 2, 1, 3]), usize::MAX).unwrap();
    let misses: Vec<_> = steps.iter().map(|s| s.is_fault()).collect();
    assert_eq!(misses, [true, true, false, true]);
    assert!(steps.iter().all(|s| s.evicted.is_none()));
    assert_eq!(steps[3].frames_after.last(), Some(&FrameSlot::new(3, FrameRole::Inserted)));
    assert_eq!(sim.resident(), [1, 2, 3]);
    assert_eq!(sim.capacity(), usize::MAX);

    // Same through text input.
    let mut sim = LruSimulator::new();
    let frames = parse_capacity("1000000000000").unwrap();
    let step = sim.start(refs("1 2"), frames).unwrap();
    assert!(step.is_fault());
    assert_eq!(sim.advance().unwrap().faults, 2);
    assert_eq!(sim.resident(), ["1", "2"]);
}
