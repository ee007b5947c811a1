// Contract-level checks that do not need a deployed instance: the contract
// object builds against the debug API, and the pure helpers behind airline
// consensus and oracle reporting hold their thresholds.
//
// Endpoint behavior is covered by the blackbox scenarios in
// flight_surety_blackbox_test.rs.

use multiversx_sc_scenario::api::DebugApi;

use flight_surety::airlines::{required_votes, CONSENSUS_THRESHOLD_COUNT};
use flight_surety::types::{
    is_known_status_code, OracleIndexes, STATUS_CODE_LATE_AIRLINE, STATUS_CODE_LATE_OTHER,
    STATUS_CODE_ON_TIME, STATUS_CODE_UNKNOWN,
};

type FlightSuretyContract = flight_surety::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> FlightSuretyContract = flight_surety::contract_obj;
}

#[test]
fn majority_rounds_half_up() {
    assert_eq!(required_votes(CONSENSUS_THRESHOLD_COUNT), 2);
    assert_eq!(required_votes(5), 3);
    assert_eq!(required_votes(6), 3);
    assert_eq!(required_votes(7), 4);
}

#[test]
fn only_relay_status_codes_are_known() {
    for status_code in [
        STATUS_CODE_UNKNOWN,
        STATUS_CODE_ON_TIME,
        STATUS_CODE_LATE_AIRLINE,
        STATUS_CODE_LATE_OTHER,
    ] {
        assert!(is_known_status_code(status_code));
    }
    assert!(!is_known_status_code(25));
    assert!(!is_known_status_code(60));
}

#[test]
fn oracle_indexes_membership() {
    let indexes = OracleIndexes {
        first: 1,
        second: 4,
        third: 9,
    };

    assert!(indexes.contains(4));
    assert!(!indexes.contains(0));
    assert_eq!(indexes.into_multi_value().into_tuple(), (1, 4, 9));
}
