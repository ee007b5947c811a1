pub const ERR_NOT_OPERATIONAL: &str = "Contract is currently not operational";
pub const ERR_UNAUTHORIZED: &str = "Caller is not authorized";

pub const ERR_NOT_AIRLINE: &str = "Only registered airlines can provide funding";
pub const ERR_NOT_FUNDED: &str = "Airline has not provided funding";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Funding amount must be greater than zero";
pub const ERR_ALREADY_REGISTERED: &str = "Airline is already registered";

pub const ERR_ZERO_PREMIUM: &str = "Insurance premium must be greater than zero";
pub const ERR_EXCEEDS_CAP: &str = "Insurance premium exceeds 1 EGLD";
pub const ERR_ALREADY_INSURED: &str = "Passenger already insured for this flight";
pub const ERR_INVALID_PAYOUT_RATIO: &str = "Payout ratio must be greater than zero";
pub const ERR_NO_CREDIT: &str = "No credit available for withdrawal";
pub const ERR_FLIGHT_SETTLED: &str = "Flight has already been settled";

pub const ERR_INSUFFICIENT_FEE: &str = "Registration fee is required";
pub const ERR_ORACLE_ALREADY_REGISTERED: &str = "Oracle is already registered";
pub const ERR_NOT_ORACLE: &str = "Caller is not a registered oracle";
pub const ERR_UNASSIGNED_INDEX: &str = "Index does not match oracle request";
pub const ERR_UNKNOWN_STATUS_CODE: &str = "Unknown flight status code";
