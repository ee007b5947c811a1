#![no_std]

multiversx_sc::imports!();

pub mod airlines;
pub mod errors;
pub mod flight_surety_proxy;
pub mod insurance;
pub mod operational;
pub mod oracles;
pub mod types;

use airlines::{minimum_funding, CONSENSUS_THRESHOLD_COUNT};
use errors::ERR_UNAUTHORIZED;
use insurance::MAX_PREMIUM;
use oracles::MIN_RESPONSES;

// ============================================================
// Contract
// ============================================================

/// Flight-delay insurance settled on chain: airlines stake and admit each
/// other, passengers escrow premiums per flight, oracles adjudicate flight
/// status by quorum and late-airline verdicts credit insurees at 1.5x.
#[multiversx_sc::contract]
pub trait FlightSurety:
    operational::OperationalModule
    + airlines::AirlineRegistryModule
    + insurance::InsurancePoolModule
    + oracles::OracleQuorumModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, first_airline: ManagedAddress, registration_fee: BigUint) {
        let owner = self.blockchain().get_caller();
        self.owner().set(&owner);
        self.operational().set(true);
        self.registration_fee().set(&registration_fee);

        self.bootstrap_airline(&first_airline);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: authorizeCaller / deauthorizeCaller
    // Owner-managed set of accounts allowed to credit insurees.
    // ========================================================

    #[endpoint(authorizeCaller)]
    fn authorize_caller(&self, caller: ManagedAddress) {
        self.require_owner();

        if self.authorized_callers().insert(caller.clone()) {
            self.caller_authorized_event(&caller);
        }
    }

    #[endpoint(deauthorizeCaller)]
    fn deauthorize_caller(&self, caller: ManagedAddress) {
        self.require_owner();

        if self.authorized_callers().swap_remove(&caller) {
            self.caller_deauthorized_event(&caller);
        }
    }

    // ========================================================
    // ENDPOINT: creditInsurees
    // Manual verdict path; the oracle quorum credits internally.
    // ========================================================

    #[endpoint(creditInsurees)]
    fn credit_flight_insurees(&self, flight: ManagedBuffer, payout_ratio: u64) -> BigUint {
        self.require_operational();
        self.require_authorized_caller();

        self.credit_insurees(&flight, payout_ratio)
    }

    fn require_authorized_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get() || self.authorized_callers().contains(&caller),
            ERR_UNAUTHORIZED
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isCallerAuthorized)]
    fn is_caller_authorized(&self, caller: &ManagedAddress) -> bool {
        self.authorized_callers().contains(caller)
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<BigUint, BigUint, BigUint, u64, u64> {
        let minimum: BigUint = minimum_funding();
        (
            minimum,
            BigUint::from(MAX_PREMIUM),
            self.registration_fee().get(),
            CONSENSUS_THRESHOLD_COUNT,
            MIN_RESPONSES,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("callerAuthorized")]
    fn caller_authorized_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("callerDeauthorized")]
    fn caller_deauthorized_event(&self, #[indexed] caller: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("authorizedCallers")]
    fn authorized_callers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
