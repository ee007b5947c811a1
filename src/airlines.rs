multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REGISTERED, ERR_INSUFFICIENT_FUNDS, ERR_NOT_AIRLINE, ERR_NOT_FUNDED,
};
use crate::operational;
use crate::types::{Airline, RegistrationOutcome};

const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Stake, in whole EGLD, an airline must accumulate before it may propose or vote
pub const MINIMUM_FUNDING_EGLD: u64 = 10;

/// Below this many registered airlines a single funded airline admits a
/// newcomer on its own. From this count on, admission needs a majority.
pub const CONSENSUS_THRESHOLD_COUNT: u64 = 4;

/// Distinct votes needed to admit a candidate: at least half of the
/// registered airlines, rounded up.
pub fn required_votes(registered_count: u64) -> u64 {
    registered_count.div_ceil(2)
}

/// `MINIMUM_FUNDING_EGLD` in denomination units. 10 EGLD overflows an `i64`.
pub fn minimum_funding<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(ONE_EGLD) * MINIMUM_FUNDING_EGLD
}

#[multiversx_sc::module]
pub trait AirlineRegistryModule: operational::OperationalModule {
    // ========================================================
    // ENDPOINT: fund
    // Registered airlines stake EGLD until they reach the minimum.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_INSUFFICIENT_FUNDS);
        require!(self.is_airline_registered(&caller), ERR_NOT_AIRLINE);

        let minimum: BigUint = minimum_funding();
        let mut airline = self.airlines(&caller).get();
        airline.funded_amount += &payment_amount;
        if !airline.funded && airline.funded_amount >= minimum {
            airline.funded = true;
        }
        self.airlines(&caller).set(&airline);

        self.airline_funded_event(&caller, &payment_amount, &airline.funded_amount);
    }

    // ========================================================
    // ENDPOINT: registerAirline
    // Direct admission while fewer than 4 airlines are registered,
    // majority vote of registered airlines afterwards.
    // ========================================================

    #[endpoint(registerAirline)]
    fn register_airline(&self, airline: ManagedAddress) -> RegistrationOutcome {
        self.require_operational();

        let proposer = self.blockchain().get_caller();
        require!(self.is_airline_funded(&proposer), ERR_NOT_FUNDED);
        require!(!self.is_airline_registered(&airline), ERR_ALREADY_REGISTERED);

        let registered_count = self.registered_airlines_count();
        if registered_count < CONSENSUS_THRESHOLD_COUNT {
            self.admit_airline(&airline, &proposer);
            return RegistrationOutcome::Registered;
        }

        // ── Consensus: one vote per distinct funded airline ──
        if self.airlines(&airline).is_empty() {
            let candidate: Airline<Self::Api> = Airline::candidate();
            self.airlines(&airline).set(&candidate);
        }
        self.airline_votes(&airline).insert(proposer.clone());

        let votes = self.airline_votes(&airline).len() as u64;
        self.airline_vote_event(&airline, &proposer, votes);

        if votes >= required_votes(registered_count) {
            self.admit_airline(&airline, &proposer);
            RegistrationOutcome::AdmittedByConsensus
        } else {
            RegistrationOutcome::VoteRecorded
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Genesis: the deployer installs the first airline, registered but
    /// not yet funded.
    fn bootstrap_airline(&self, first_airline: &ManagedAddress) {
        let deployer = self.blockchain().get_caller();
        self.admit_airline(first_airline, &deployer);
    }

    fn admit_airline(&self, airline: &ManagedAddress, admitted_by: &ManagedAddress) {
        let mut record = self.airline_record(airline);
        record.registered = true;
        self.airlines(airline).set(&record);
        self.registered_airlines().insert(airline.clone());
        self.airline_votes(airline).clear();

        self.airline_registered_event(airline, admitted_by);
    }

    fn airline_record(&self, airline: &ManagedAddress) -> Airline<Self::Api> {
        if self.airlines(airline).is_empty() {
            Airline::candidate()
        } else {
            self.airlines(airline).get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAirlineRegistered)]
    fn is_airline_registered(&self, airline: &ManagedAddress) -> bool {
        self.registered_airlines().contains(airline)
    }

    #[view(isAirlineFunded)]
    fn is_airline_funded(&self, airline: &ManagedAddress) -> bool {
        self.airline_record(airline).funded
    }

    #[view(registeredAirlinesCount)]
    fn registered_airlines_count(&self) -> u64 {
        self.registered_airlines().len() as u64
    }

    #[view(getAirline)]
    fn get_airline(&self, airline: &ManagedAddress) -> Airline<Self::Api> {
        self.airline_record(airline)
    }

    #[view(getAirlineVotes)]
    fn get_airline_votes(&self, candidate: &ManagedAddress) -> u64 {
        self.airline_votes(candidate).len() as u64
    }

    #[view(getRegisteredAirlines)]
    fn get_registered_airlines(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for airline in self.registered_airlines().iter() {
            result.push(airline);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("airlineFunded")]
    fn airline_funded_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_funded: &BigUint,
    );

    #[event("airlineRegistered")]
    fn airline_registered_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] admitted_by: &ManagedAddress,
    );

    #[event("airlineVote")]
    fn airline_vote_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] voter: &ManagedAddress,
        votes: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("airlines")]
    fn airlines(&self, airline: &ManagedAddress) -> SingleValueMapper<Airline<Self::Api>>;

    #[storage_mapper("registeredAirlines")]
    fn registered_airlines(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("airlineVotes")]
    fn airline_votes(&self, candidate: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
