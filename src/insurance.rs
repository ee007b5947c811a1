multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_INSURED, ERR_EXCEEDS_CAP, ERR_FLIGHT_SETTLED, ERR_INVALID_PAYOUT_RATIO,
    ERR_NO_CREDIT, ERR_ZERO_PREMIUM,
};
use crate::operational;
use crate::types::{InsurancePolicy, PolicyStatus};

/// Per-passenger, per-flight premium cap: 1 EGLD
pub const MAX_PREMIUM: u64 = 1_000_000_000_000_000_000;

/// Payout multiplier applied on a late-airline verdict: 1.5x
pub const PAYOUT_RATIO: u64 = 1_500_000;

pub const PAYOUT_RATIO_DENOMINATOR: u64 = 1_000_000;

#[multiversx_sc::module]
pub trait InsurancePoolModule: operational::OperationalModule {
    // ========================================================
    // ENDPOINT: buy
    // One policy per (flight, passenger), premium capped at 1 EGLD.
    // Closed once the flight has been credited.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(buy)]
    fn buy(&self, flight: ManagedBuffer) {
        self.require_operational();

        let passenger = self.blockchain().get_caller();
        let premium = self.call_value().egld_value().clone_value();
        require!(premium > 0u64, ERR_ZERO_PREMIUM);
        require!(premium <= MAX_PREMIUM, ERR_EXCEEDS_CAP);
        require!(
            !self.settled_flights().contains(&flight),
            ERR_FLIGHT_SETTLED
        );
        require!(
            self.policies(&flight, &passenger).is_empty(),
            ERR_ALREADY_INSURED
        );

        let policy = InsurancePolicy {
            premium: premium.clone(),
            credit: BigUint::zero(),
            status: PolicyStatus::Active,
        };
        self.policies(&flight, &passenger).set(&policy);
        self.flight_insurees(&flight).insert(passenger.clone());
        self.passenger_flights(&passenger).insert(flight.clone());
        self.total_premiums().update(|total| *total += &premium);

        self.insurance_purchased_event(&passenger, &flight, &premium);
    }

    // ========================================================
    // ENDPOINT: pay
    // Withdraw every pending credit of the caller in one transfer.
    // Credits are zeroed before the transfer is issued.
    // ========================================================

    #[endpoint(pay)]
    fn pay(&self) -> BigUint {
        self.require_operational();

        let passenger = self.blockchain().get_caller();
        let mut payout = BigUint::zero();

        for flight in self.passenger_flights(&passenger).iter() {
            let policy_mapper = self.policies(&flight, &passenger);
            let mut policy = policy_mapper.get();
            if policy.status != PolicyStatus::Credited {
                continue;
            }

            payout += &policy.credit;
            policy.credit = BigUint::zero();
            policy.status = PolicyStatus::Paid;
            policy_mapper.set(&policy);
        }

        require!(payout > 0u64, ERR_NO_CREDIT);

        self.outstanding_credit().update(|total| *total -= &payout);
        self.total_paid_out().update(|total| *total += &payout);

        self.send().direct_egld(&passenger, &payout);
        self.credit_withdrawn_event(&passenger, &payout);

        payout
    }

    // ========================================================
    // INTERNAL: credit insurees of a flight
    // Only Active policies are credited, so repeated verdicts on the
    // same flight never stack.
    // ========================================================

    fn credit_insurees(&self, flight: &ManagedBuffer, payout_ratio: u64) -> BigUint {
        require!(payout_ratio > 0, ERR_INVALID_PAYOUT_RATIO);

        self.settled_flights().insert(flight.clone());

        let mut total_credited = BigUint::zero();
        for passenger in self.flight_insurees(flight).iter() {
            let policy_mapper = self.policies(flight, &passenger);
            let mut policy = policy_mapper.get();
            if policy.status != PolicyStatus::Active {
                continue;
            }

            let credit = (&policy.premium * payout_ratio) / PAYOUT_RATIO_DENOMINATOR;
            policy.credit = credit.clone();
            policy.status = PolicyStatus::Credited;
            policy_mapper.set(&policy);

            self.insuree_credited_event(&passenger, flight, &credit);
            total_credited += &credit;
        }

        self.outstanding_credit()
            .update(|total| *total += &total_credited);
        total_credited
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getInsurance)]
    fn get_insurance(&self, flight: &ManagedBuffer, passenger: &ManagedAddress) -> BigUint {
        let policy_mapper = self.policies(flight, passenger);
        if policy_mapper.is_empty() {
            return BigUint::zero();
        }
        policy_mapper.get().premium
    }

    #[view(passengerCredit)]
    fn passenger_credit(&self, passenger: &ManagedAddress) -> BigUint {
        let mut credit = BigUint::zero();
        for flight in self.passenger_flights(passenger).iter() {
            credit += self.policies(&flight, passenger).get().credit;
        }
        credit
    }

    #[view(getPolicyStatus)]
    fn get_policy_status(
        &self,
        flight: &ManagedBuffer,
        passenger: &ManagedAddress,
    ) -> OptionalValue<PolicyStatus> {
        let policy_mapper = self.policies(flight, passenger);
        if policy_mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(policy_mapper.get().status)
    }

    #[view(isFlightSettled)]
    fn is_flight_settled(&self, flight: &ManagedBuffer) -> bool {
        self.settled_flights().contains(flight)
    }

    /// Escrowed premiums, credit awaiting withdrawal, credit already paid out.
    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.total_premiums().get(),
            self.outstanding_credit().get(),
            self.total_paid_out().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("insurancePurchased")]
    fn insurance_purchased_event(
        &self,
        #[indexed] passenger: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        premium: &BigUint,
    );

    #[event("insureeCredited")]
    fn insuree_credited_event(
        &self,
        #[indexed] passenger: &ManagedAddress,
        #[indexed] flight: &ManagedBuffer,
        credit: &BigUint,
    );

    #[event("creditWithdrawn")]
    fn credit_withdrawn_event(&self, #[indexed] passenger: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("policies")]
    fn policies(
        &self,
        flight: &ManagedBuffer,
        passenger: &ManagedAddress,
    ) -> SingleValueMapper<InsurancePolicy<Self::Api>>;

    #[storage_mapper("flightInsurees")]
    fn flight_insurees(&self, flight: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("passengerFlights")]
    fn passenger_flights(&self, passenger: &ManagedAddress) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("settledFlights")]
    fn settled_flights(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("totalPremiums")]
    fn total_premiums(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("outstandingCredit")]
    fn outstanding_credit(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalPaidOut")]
    fn total_paid_out(&self) -> SingleValueMapper<BigUint>;
}
