use hostcheck::record::{Field, Record};

#[test]
fn one_argument_emplace_grows_by_one() {
    let mut record = Record::new();

    record.emplace(1);

    assert_eq!(record.len(), 1);
    assert_eq!(record[0], Field::at(1));
}

#[test]
fn push_converts_a_bare_offset() {
    let mut record = Record::new();

    record.push(1u64);

    assert_eq!(record.len(), 1);
    assert_eq!(record[0], Field::at(1));
}

#[test]
fn two_argument_emplace_invokes_the_constructor_directly() {
    let mut record = Record::new();

    record.emplace_sized(1, 2);

    assert_eq!(record.len(), 1);
    assert_eq!(record[0], Field::new(1, 2));
}

#[test]
fn push_accepts_a_preconstructed_field() {
    let mut record = Record::new();

    record.push(Field::new(1, 2));

    assert_eq!(record.len(), 1);
    assert_eq!(record[0], Field::new(1, 2));
}

#[test]
fn four_insertion_paths_yield_four_fields() {
    let mut record = Record::new();

    record.emplace(1);
    assert_eq!(record.len(), 1);

    record.push(1u64);
    assert_eq!(record.len(), 2);

    record.emplace_sized(1, 2);
    assert_eq!(record.len(), 3);

    // record.push((1, 2)); // does not compile: no pair-to-field conversion

    record.push(Field::new(1, 2));
    assert_eq!(record.len(), 4);
}

#[test]
fn insertion_order_is_preserved() {
    let mut record = Record::new();

    record.emplace_sized(0, 8);
    record.emplace_sized(8, 4);
    record.emplace(12);

    let offsets: Vec<_> = record.fields().iter().map(Field::offset).collect();
    assert_eq!(offsets, vec![0, 8, 12]);
}

#[test]
fn empty_record_reports_empty() {
    let record = Record::new();

    assert!(record.is_empty());
    assert_eq!(record.len(), 0);
    assert!(record.fields().is_empty());
}
