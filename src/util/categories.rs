//! Default category labels offered before a user has history of their own.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::TransactionKind;

/// A category name in Traditional Chinese (stored on the server) and English.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryLabel {
    pub zh: &'static str,
    pub en: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultCategories {
    pub expense: &'static [CategoryLabel],
    pub income: &'static [CategoryLabel],
}

impl DefaultCategories {
    pub fn for_kind(&self, kind: TransactionKind) -> &'static [CategoryLabel] {
        match kind {
            TransactionKind::Expense => self.expense,
            TransactionKind::Income => self.income,
        }
    }
}

const fn label(zh: &'static str, en: &'static str) -> CategoryLabel {
    CategoryLabel { zh, en }
}

pub const DEFAULT_CATEGORIES: DefaultCategories = DefaultCategories {
    expense: &[
        label("餐飲", "Food"),
        label("交通", "Transport"),
        label("購物", "Shopping"),
        label("娛樂", "Entertainment"),
        label("日用品", "Household"),
        label("醫療", "Medical"),
        label("教育", "Education"),
        label("其他", "Other"),
    ],
    income: &[
        label("薪資", "Salary"),
        label("獎金", "Bonus"),
        label("投資", "Investment"),
        label("兼職", "Part-time"),
        label("其他", "Other"),
    ],
};
