#![cfg(test)]
use cidr_core::Expander;
use cidr_core::membership;
use cidr_core::resolver::NoResolver;

#[test]
fn slash_30_contains_network_through_broadcast() {
    let expander = Expander::new(NoResolver);
    let candidates = ["10.10.10.0", "10.10.10.1", "10.10.10.2", "10.10.10.3"];

    let result = membership::check_membership(&expander, "10.10.10.3/30", &candidates);

    assert_eq!(result.len(), candidates.len());
    for (record, candidate) in result.iter().zip(candidates) {
        assert_eq!(record.ip, candidate);
        assert!(record.belongs, "{candidate} should belong");
    }
}

#[test]
fn membership_is_exact_string_match() {
    let expander = Expander::new(NoResolver);
    let result = membership::check_membership(
        &expander,
        "10.10.10.0/24",
        &["10.10.10.7", "10.10.10.07", "10.10.11.7"],
    );

    let belongs: Vec<bool> = result.iter().map(|m| m.belongs).collect();
    assert_eq!(belongs, vec![true, false, false]);
}

#[test]
fn ranges_are_checked_independently() {
    let expander = Expander::new(NoResolver);
    let ranges = ["192.168.10.1/30", "220.10.5.15/28", "bad/"];
    let candidates = ["192.168.10.3", "220.10.5.18", "192.168.10.230"];

    let grouped = membership::check_all(&expander, &ranges, &candidates);

    let summary: Vec<(&str, Vec<bool>)> = grouped
        .iter()
        .map(|(range, records)| {
            (
                range.as_str(),
                records.iter().map(|m| m.belongs).collect(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("192.168.10.1/30", vec![true, false, false]),
            ("220.10.5.15/28", vec![false, false, false]),
            ("bad/", vec![false, false, false]),
        ]
    );
}
