use vendessimal_core::primes::{
    is_prime, lucky_prime_trace, primes_upto, twin_pairs_upto, twin_primes_upto, PrimeTable,
};

#[test]
fn sieve_matches_trial_division_up_to_two_thousand() {
    let sieved = primes_upto(2000);
    let trial: Vec<u64> = (2..=2000).filter(|&k| is_prime(k)).collect();
    assert_eq!(sieved, trial);
}

#[test]
fn twin_members_below_fifty() {
    let twins: Vec<u64> = twin_pairs_upto(50).into_iter().collect();
    assert_eq!(twins, vec![3, 5, 7, 11, 13, 17, 19, 29, 31, 41, 43]);
}

#[test]
fn twin_pair_needs_both_members_in_range() {
    // (41, 43) is cut at n = 42
    let twins = twin_pairs_upto(42);
    assert!(!twins.contains(&41));
    assert!(!twins.contains(&43));
    assert!(twin_pairs_upto(4).is_empty());
    assert_eq!(twin_pairs_upto(5).into_iter().collect::<Vec<_>>(), vec![3, 5]);
}

#[test]
fn twin_list_keeps_partner_past_n() {
    // 41 + 2 = 43 > 41 but still reported from the n + 2 sieve
    assert_eq!(twin_primes_upto(41), vec![3, 5, 11, 17, 29, 41]);
}

#[test]
fn lucky_trace_boundaries() {
    assert!(lucky_prime_trace(40).is_empty());
    assert_eq!(lucky_prime_trace(41), vec![41]);
    assert_eq!(lucky_prime_trace(50), vec![41, 43, 47]);
    assert_eq!(lucky_prime_trace(0), Vec::<u64>::new());
}

#[test]
fn prime_table_cross_reference() {
    let table = PrimeTable::sieve(1700);
    let trace = lucky_prime_trace(1700);
    let prime_members = table.retain_primes(&trace);
    assert_eq!(trace.len(), prime_members.len() + 1);
    assert!(!prime_members.contains(&1681));
}

#[test]
fn large_prime_by_trial_division() {
    assert!(is_prime(1_000_000_007));
    assert!(!is_prime(1_000_000_007 * 3));
}
