//! Ledger session
//!
//! A [`Session`] owns one user's [`LedgerState`] for the length of a command.
//! Every mutation validates first, is applied in memory, then written back
//! through the [`LedgerStore`]. When the write fails the mutation stays
//! applied, the session stays dirty and [`Session::flush`] can retry.
//!
//! Audit entries are written after a successful save. An audit failure never
//! fails the mutation; it is kept as a warning for the caller to show.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{
    Amount, BudgetCategory, BudgetMonth, BudgetPlan, Goal, LedgerState, LedgerTotals,
    Transaction, TransactionKind, UserKey,
};
use crate::reports::{BudgetStatus, Dashboard, GoalProgressReport, PeriodReport};
use crate::storage::LedgerStore;

/// One user's ledger, loaded and ready for mutation
pub struct Session<'a, S: LedgerStore + ?Sized> {
    user: UserKey,
    state: LedgerState,
    store: &'a S,
    audit: Option<&'a AuditLogger>,
    dirty: bool,
    warnings: Vec<String>,
}

impl<'a, S: LedgerStore + ?Sized> Session<'a, S> {
    /// Load the user's ledger (empty if nothing is stored yet)
    pub fn open(user: UserKey, store: &'a S) -> PocketbookResult<Self> {
        if user.is_empty() {
            return Err(PocketbookError::not_logged_in());
        }
        let state = store.load(&user)?;
        Ok(Self {
            user,
            state,
            store,
            audit: None,
            dirty: false,
            warnings: Vec::new(),
        })
    }

    /// Record every successful mutation in the audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// True when in-memory changes have not been written back
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Drain warnings collected since the last call
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn add_income(
        &mut self,
        description: &str,
        amount: f64,
        date: &str,
        category: &str,
    ) -> PocketbookResult<Transaction> {
        self.add_transaction(TransactionKind::Income, description, amount, date, category)
    }

    pub fn add_expense(
        &mut self,
        description: &str,
        amount: f64,
        date: &str,
        category: &str,
    ) -> PocketbookResult<Transaction> {
        self.add_transaction(TransactionKind::Expense, description, amount, date, category)
    }

    fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: f64,
        date: &str,
        category: &str,
    ) -> PocketbookResult<Transaction> {
        let txn = Transaction::from_input(description, amount, date, category)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let recorded = self.state.record(kind, txn).clone();
        self.dirty = true;
        self.flush()?;

        let (entity_type, position) = match kind {
            TransactionKind::Income => (EntityType::Income, self.state.incomes.len()),
            TransactionKind::Expense => (EntityType::Expense, self.state.expenses.len()),
        };
        self.log_create(
            entity_type,
            format!("{}#{}", kind.noun(), position),
            Some(recorded.description.clone()),
            &recorded,
        );

        Ok(recorded)
    }

    /// Replace the budget plan; categories not given get a limit of zero
    pub fn set_budget_plan(
        &mut self,
        month: &str,
        limits: &[(BudgetCategory, f64)],
    ) -> PocketbookResult<BudgetPlan> {
        if month.trim().is_empty() {
            return Err(PocketbookError::Validation("Please select a month.".into()));
        }
        let month = BudgetMonth::parse(month.trim())
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let mut values: BTreeMap<BudgetCategory, Amount> = BudgetCategory::ALL
            .into_iter()
            .map(|c| (c, Amount::zero()))
            .collect();
        for (category, limit) in limits {
            values.insert(*category, Amount::new(*limit));
        }

        let plan = BudgetPlan {
            month,
            limits: values,
        };
        plan.validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let previous = self.state.replace_budget_plan(plan.clone());
        self.dirty = true;
        self.flush()?;

        let name = Some(month.friendly());
        match previous {
            Some(before) => {
                let entry = AuditEntry::update(
                    &self.user,
                    EntityType::BudgetPlan,
                    "budget_plan",
                    name,
                    &before,
                    &plan,
                );
                self.log(entry);
            }
            None => self.log_create(EntityType::BudgetPlan, "budget_plan", name, &plan),
        }

        Ok(plan)
    }

    pub fn add_goal(
        &mut self,
        name: &str,
        target: f64,
        deadline: Option<&str>,
    ) -> PocketbookResult<Goal> {
        let goal = Goal::from_input(name, target, deadline)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let added = self.state.add_goal(goal).clone();
        self.dirty = true;
        self.flush()?;

        self.log_create(
            EntityType::Goal,
            format!("goal#{}", self.state.goals.len()),
            Some(added.name.clone()),
            &added,
        );

        Ok(added)
    }

    /// Write pending changes back to the store
    pub fn flush(&mut self) -> PocketbookResult<()> {
        if self.dirty {
            self.store.save(&self.user, &self.state)?;
            self.dirty = false;
        }
        Ok(())
    }

    pub fn totals(&self) -> LedgerTotals {
        self.state.totals()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::evaluate(self.state.budget_plan.as_ref(), &self.state.expenses)
    }

    pub fn goal_progress(&self) -> GoalProgressReport {
        GoalProgressReport::allocate(self.totals().balance, &self.state.goals)
    }

    pub fn report(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> PocketbookResult<PeriodReport> {
        PeriodReport::generate(start, end, &self.state)
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::generate(&self.state)
    }

    fn log_create<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        let entry = AuditEntry::create(&self.user, entity_type, entity_id, entity_name, entity);
        self.log(entry);
    }

    fn log(&mut self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(&entry) {
                self.warnings.push(format!(
                    "Change saved, but the audit log could not be written: {}",
                    e
                ));
            }
        }
    }
}
