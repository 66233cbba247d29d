use super::*;

#[test]
fn test_stacks_are_disjoint() {
    let mut memory = Memory::default();
    for cell in 1..=3 {
        memory.active_mut().push(cell).unwrap();
    }
    memory.toggle();
    assert_eq!(memory.selected(), 1);
    memory.active_mut().push(9).unwrap();
    memory.toggle();
    assert_eq!(memory.active().as_slice(), &[1, 2, 3]);
    assert_eq!(memory.stack(1).unwrap().as_slice(), &[9]);
}

#[test]
fn test_select() {
    let mut memory = Memory::new(4);
    memory.select(1).unwrap();
    assert_eq!(memory.selected(), 1);
    assert_eq!(memory.select(2).unwrap_err().code(), ErrorCode::InvalidStackIndex);
    assert_eq!(memory.selected(), 1);
    assert_eq!(memory.stack(2).unwrap_err().code(), ErrorCode::InvalidStackIndex);
    assert_eq!(memory.active().capacity(), 4);
}

#[test]
fn test_reset() {
    let mut memory = Memory::default();
    memory.active_mut().push(1).unwrap();
    memory.select(1).unwrap();
    memory.active_mut().push(2).unwrap();
    memory.reset();
    assert!(memory.stack(0).unwrap().is_empty());
    assert!(memory.stack(1).unwrap().is_empty());
    assert_eq!(memory.selected(), 1);
}
