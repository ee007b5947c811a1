multiversx_sc::imports!();

use crate::errors::{
    ERR_INSUFFICIENT_FEE, ERR_NOT_ORACLE, ERR_ORACLE_ALREADY_REGISTERED, ERR_UNASSIGNED_INDEX,
    ERR_UNKNOWN_STATUS_CODE,
};
use crate::insurance::{self, PAYOUT_RATIO};
use crate::operational;
use crate::types::{
    is_known_status_code, FlightStatusRecord, OracleIndexes, ResponseKey,
    STATUS_CODE_LATE_AIRLINE, STATUS_CODE_UNKNOWN,
};

/// Matching responses needed before a status is accepted
pub const MIN_RESPONSES: u64 = 3;

/// Oracle indexes are drawn from `0..INDEX_RANGE`
pub const INDEX_RANGE: u8 = 10;

#[multiversx_sc::module]
pub trait OracleQuorumModule:
    operational::OperationalModule + insurance::InsurancePoolModule
{
    // ========================================================
    // ENDPOINT: registerOracle
    // Pays the fee, receives three distinct immutable indexes.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(registerOracle)]
    fn register_oracle(&self) -> MultiValue3<u8, u8, u8> {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let fee = self.call_value().egld_value().clone_value();
        require!(fee >= self.registration_fee().get(), ERR_INSUFFICIENT_FEE);
        require!(
            self.oracle_indexes(&caller).is_empty(),
            ERR_ORACLE_ALREADY_REGISTERED
        );

        let indexes = self.generate_indexes();
        self.oracle_indexes(&caller).set(indexes);
        self.oracle_count().update(|count| *count += 1);

        self.oracle_registered_event(&caller, &indexes);

        indexes.into_multi_value()
    }

    #[view(getMyIndexes)]
    fn get_my_indexes(&self) -> MultiValue3<u8, u8, u8> {
        let caller = self.blockchain().get_caller();
        require!(!self.oracle_indexes(&caller).is_empty(), ERR_NOT_ORACLE);

        self.oracle_indexes(&caller).get().into_multi_value()
    }

    // ========================================================
    // ENDPOINT: fetchFlightStatus
    // Emits the request that off-chain oracles listen for.
    // ========================================================

    #[endpoint(fetchFlightStatus)]
    fn fetch_flight_status(
        &self,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        self.require_operational();

        let mut rand_source = RandomnessSource::new();
        let index = rand_source.next_u8_in_range(0, INDEX_RANGE);

        self.oracle_request_event(index, &airline, &flight, timestamp);

        index
    }

    // ========================================================
    // ENDPOINT: submitOracleResponse
    // Records (oracle, status) under the request key. The key closes
    // the first time a status collects MIN_RESPONSES oracles; later
    // responses are kept for audit only.
    // ========================================================

    #[endpoint(submitOracleResponse)]
    fn submit_oracle_response(
        &self,
        index: u8,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        require!(!self.oracle_indexes(&caller).is_empty(), ERR_NOT_ORACLE);
        require!(
            self.oracle_indexes(&caller).get().contains(index),
            ERR_UNASSIGNED_INDEX
        );
        require!(is_known_status_code(status_code), ERR_UNKNOWN_STATUS_CODE);

        let key = ResponseKey {
            index,
            airline,
            flight,
            timestamp,
        };
        let mut responders = self.oracle_responses(&key, status_code);
        responders.insert(caller);

        self.oracle_report_event(&key.airline, &key.flight, key.timestamp, status_code);

        if !self.resolved_status(&key).is_empty() {
            return;
        }

        if responders.len() as u64 >= MIN_RESPONSES {
            self.finalize_flight_status(&key, status_code);
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn finalize_flight_status(&self, key: &ResponseKey<Self::Api>, status_code: u8) {
        let record = FlightStatusRecord {
            status_code,
            index: key.index,
        };
        self.resolved_status(key).set(record);
        self.flight_statuses(&key.airline, &key.flight, key.timestamp)
            .set(record);

        self.flight_status_info_event(&key.airline, &key.flight, key.timestamp, status_code);

        if status_code == STATUS_CODE_LATE_AIRLINE {
            self.credit_insurees(&key.flight, PAYOUT_RATIO);
        }
    }

    fn generate_indexes(&self) -> OracleIndexes {
        let mut rand_source = RandomnessSource::new();

        let first = rand_source.next_u8_in_range(0, INDEX_RANGE);

        let mut second = rand_source.next_u8_in_range(0, INDEX_RANGE);
        while second == first {
            second = rand_source.next_u8_in_range(0, INDEX_RANGE);
        }

        let mut third = rand_source.next_u8_in_range(0, INDEX_RANGE);
        while third == first || third == second {
            third = rand_source.next_u8_in_range(0, INDEX_RANGE);
        }

        OracleIndexes {
            first,
            second,
            third,
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOracleRegistered)]
    fn is_oracle_registered(&self, oracle: &ManagedAddress) -> bool {
        !self.oracle_indexes(oracle).is_empty()
    }

    /// Last status accepted for the flight, `STATUS_CODE_UNKNOWN` while unresolved.
    #[view(getFlightStatus)]
    fn get_flight_status(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        let status_mapper = self.flight_statuses(airline, flight, timestamp);
        if status_mapper.is_empty() {
            return STATUS_CODE_UNKNOWN;
        }
        status_mapper.get().status_code
    }

    #[view(isResponseClosed)]
    fn is_response_closed(
        &self,
        index: u8,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
    ) -> bool {
        let key = ResponseKey {
            index,
            airline,
            flight,
            timestamp,
        };
        !self.resolved_status(&key).is_empty()
    }

    #[view(getResponseCount)]
    fn get_response_count(
        &self,
        index: u8,
        airline: ManagedAddress,
        flight: ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) -> u64 {
        let key = ResponseKey {
            index,
            airline,
            flight,
            timestamp,
        };
        self.oracle_responses(&key, status_code).len() as u64
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("oracleRequest")]
    fn oracle_request_event(
        &self,
        #[indexed] index: u8,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        timestamp: u64,
    );

    #[event("oracleReport")]
    fn oracle_report_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        #[indexed] timestamp: u64,
        status_code: u8,
    );

    #[event("flightStatusInfo")]
    fn flight_status_info_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        #[indexed] timestamp: u64,
        status_code: u8,
    );

    #[event("oracleRegistered")]
    fn oracle_registered_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        indexes: &OracleIndexes,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getRegistrationFee)]
    #[storage_mapper("registrationFee")]
    fn registration_fee(&self) -> SingleValueMapper<BigUint>;

    #[view(getOracleCount)]
    #[storage_mapper("oracleCount")]
    fn oracle_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("oracleIndexes")]
    fn oracle_indexes(&self, oracle: &ManagedAddress) -> SingleValueMapper<OracleIndexes>;

    #[storage_mapper("oracleResponses")]
    fn oracle_responses(
        &self,
        key: &ResponseKey<Self::Api>,
        status_code: u8,
    ) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("resolvedStatus")]
    fn resolved_status(
        &self,
        key: &ResponseKey<Self::Api>,
    ) -> SingleValueMapper<FlightStatusRecord>;

    #[storage_mapper("flightStatuses")]
    fn flight_statuses(
        &self,
        airline: &ManagedAddress,
        flight: &ManagedBuffer,
        timestamp: u64,
    ) -> SingleValueMapper<FlightStatusRecord>;
}
