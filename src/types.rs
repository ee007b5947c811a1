multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Flight status codes reported by oracles
// ============================================================

pub const STATUS_CODE_UNKNOWN: u8 = 0;
pub const STATUS_CODE_ON_TIME: u8 = 10;
pub const STATUS_CODE_LATE_AIRLINE: u8 = 20;
pub const STATUS_CODE_LATE_WEATHER: u8 = 30;
pub const STATUS_CODE_LATE_TECHNICAL: u8 = 40;
pub const STATUS_CODE_LATE_OTHER: u8 = 50;

pub fn is_known_status_code(status_code: u8) -> bool {
    matches!(
        status_code,
        STATUS_CODE_UNKNOWN
            | STATUS_CODE_ON_TIME
            | STATUS_CODE_LATE_AIRLINE
            | STATUS_CODE_LATE_WEATHER
            | STATUS_CODE_LATE_TECHNICAL
            | STATUS_CODE_LATE_OTHER
    )
}

// ============================================================
// Airline — registry record
// ============================================================

/// Stored under the airline address. A candidate that is still collecting
/// votes has a record with `registered == false`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Airline<M: ManagedTypeApi> {
    pub registered: bool,
    pub funded: bool,
    /// Cumulative EGLD sent through `fund`. Never decreases.
    pub funded_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> Airline<M> {
    pub fn candidate() -> Self {
        Airline {
            registered: false,
            funded: false,
            funded_amount: BigUint::zero(),
        }
    }
}

/// Which admission branch `registerAirline` took.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RegistrationOutcome {
    /// Fewer than four airlines were registered; admitted on a single proposal.
    Registered,
    /// The proposer's vote completed the majority; the candidate is now registered.
    AdmittedByConsensus,
    /// The vote was recorded but the majority is not reached yet.
    VoteRecorded,
}

// ============================================================
// Insurance policy — one per (flight, passenger)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PolicyStatus {
    /// Premium escrowed, no payout decided.
    Active,
    /// Flight adjudicated late (airline fault); credit awaits withdrawal.
    Credited,
    /// Credit withdrawn by the passenger. Terminal state.
    Paid,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InsurancePolicy<M: ManagedTypeApi> {
    pub premium: BigUint<M>,
    pub credit: BigUint<M>,
    pub status: PolicyStatus,
}

// ============================================================
// Oracles
// ============================================================

/// The three distinct indexes assigned to an oracle at registration.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct OracleIndexes {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

impl OracleIndexes {
    pub fn contains(&self, index: u8) -> bool {
        self.first == index || self.second == index || self.third == index
    }

    pub fn into_multi_value(self) -> MultiValue3<u8, u8, u8> {
        (self.first, self.second, self.third).into()
    }
}

/// Responses are aggregated per request key. The same flight can be
/// resolved independently under several indexes.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ResponseKey<M: ManagedTypeApi> {
    pub index: u8,
    pub airline: ManagedAddress<M>,
    pub flight: ManagedBuffer<M>,
    pub timestamp: u64,
}

/// Outcome recorded once a response key reaches quorum.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct FlightStatusRecord {
    pub status_code: u8,
    /// Request index whose quorum produced this status
    pub index: u8,
}
