mod collection;

pub use self::collection::*;

use crate::records::{Activity, Expense, FundsDoc, Investment, Member, Salary};
use std::path::Path;
use tracing::info;

pub type SalariesDb = CollectionDb<Salary>;
pub type ExpensesDb = CollectionDb<Expense>;
pub type InvestmentsDb = CollectionDb<Investment>;
pub type ActivitiesDb = CollectionDb<Activity>;
pub type MembersDb = CollectionDb<Member>;
pub type FundsDb = CollectionDb<FundsDoc>;

fn collection_path(dir: &Path, name: &str) -> String {
    dir.join(format!("{name}.json")).to_string_lossy().into_owned()
}

impl SalariesDb {
    pub fn open_salaries(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<Salary>::new(collection_path(dir, "salaries"));
        info!("Salaries DB initialized.");
        res
    }
}

impl ExpensesDb {
    pub fn open_expenses(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<Expense>::new(collection_path(dir, "expenses"));
        info!("Expenses DB initialized.");
        res
    }
}

impl InvestmentsDb {
    pub fn open_investments(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<Investment>::new(collection_path(dir, "investments"));
        info!("Investments DB initialized.");
        res
    }
}

impl ActivitiesDb {
    pub fn open_activities(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<Activity>::new(collection_path(dir, "activities"));
        info!("Activities DB initialized.");
        res
    }
}

impl MembersDb {
    pub fn open_members(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<Member>::new(collection_path(dir, "members"));
        info!("Members DB initialized.");
        res
    }
}

impl FundsDb {
    pub fn open_funds(dir: &Path) -> Result<Self, StoreError> {
        let res = CollectionDb::<FundsDoc>::new(collection_path(dir, "funds"));
        info!("Funds DB initialized.");
        res
    }
}
