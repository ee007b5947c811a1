multiversx_sc::imports!();

use crate::errors::{ERR_NOT_OPERATIONAL, ERR_UNAUTHORIZED};

/// Kill-switch shared by every mutating endpoint, plus the owner record
/// that is allowed to flip it.
#[multiversx_sc::module]
pub trait OperationalModule {
    #[view(isOperational)]
    fn is_operational(&self) -> bool {
        self.operational().get()
    }

    #[endpoint(setOperatingStatus)]
    fn set_operating_status(&self, operational: bool) {
        self.require_owner();

        let caller = self.blockchain().get_caller();
        self.operational().set(operational);

        self.operating_status_changed_event(operational, &caller);
    }

    fn require_operational(&self) {
        require!(self.operational().get(), ERR_NOT_OPERATIONAL);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
    }

    #[view(getContractOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("operational")]
    fn operational(&self) -> SingleValueMapper<bool>;

    #[event("operatingStatusChanged")]
    fn operating_status_changed_event(
        &self,
        #[indexed] operational: bool,
        #[indexed] changed_by: &ManagedAddress,
    );
}
