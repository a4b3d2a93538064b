mod entry;
mod funds;
mod member;

pub use self::entry::*;
pub use self::funds::*;
pub use self::member::*;

/// A stored document with a generated id and exactly one owner.
pub trait Owned {
    fn id(&self) -> &str;
    fn owner_id(&self) -> &str;
}

/// A transactional record filterable by (year) or (year, month).
pub trait Windowed {
    fn year(&self) -> i64;
    fn month(&self) -> i64;
}

impl Owned for Salary {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for Expense {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for Investment {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for Activity {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for Member {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for FundsDoc {
    // The funds document id IS the owner id (one document per user).
    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.id
    }
}

impl Windowed for Salary {
    fn year(&self) -> i64 {
        self.year
    }
    fn month(&self) -> i64 {
        self.month
    }
}

impl Windowed for Expense {
    fn year(&self) -> i64 {
        self.year
    }
    fn month(&self) -> i64 {
        self.month
    }
}

impl Windowed for Investment {
    fn year(&self) -> i64 {
        self.year
    }
    fn month(&self) -> i64 {
        self.month
    }
}

impl Windowed for Activity {
    fn year(&self) -> i64 {
        self.year
    }
    fn month(&self) -> i64 {
        self.month
    }
}
