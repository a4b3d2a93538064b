use crate::auth::IdentityVerifier;
use crate::db::{
    ActivitiesDb, ExpensesDb, FundsDb, InvestmentsDb, MembersDb, SalariesDb, StoreError,
};
use std::path::Path;

/// Immutable service clients, built once at startup and handed to handlers by
/// injection. `identity` is `None` when the provider is unconfigured; the
/// auth middleware then answers 503 instead of touching any store.
#[derive(Clone)]
pub struct AppState {
    pub salaries: SalariesDb,
    pub expenses: ExpensesDb,
    pub investments: InvestmentsDb,
    pub activities: ActivitiesDb,
    pub members: MembersDb,
    pub funds: FundsDb,
    pub identity: Option<IdentityVerifier>,
}

impl AppState {
    pub fn open(db_dir: &Path, identity: Option<IdentityVerifier>) -> Result<Self, StoreError> {
        Ok(AppState {
            salaries: SalariesDb::open_salaries(db_dir)?,
            expenses: ExpensesDb::open_expenses(db_dir)?,
            investments: InvestmentsDb::open_investments(db_dir)?,
            activities: ActivitiesDb::open_activities(db_dir)?,
            members: MembersDb::open_members(db_dir)?,
            funds: FundsDb::open_funds(db_dir)?,
            identity,
        })
    }
}
