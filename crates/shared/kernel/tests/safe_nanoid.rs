use folio_kernel::SAFE_ALPHABET;
use folio_kernel::safe_nanoid;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length_ids_do_not_repeat() {
    let ids: std::collections::HashSet<String> = (0..1_000).map(|_| safe_nanoid!(20)).collect();
    assert_eq!(ids.len(), 1_000);
    assert!(ids.iter().all(|id| id.len() == 20));
}
