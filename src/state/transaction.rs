//! Transaction panel state and the conditional cancel action

use super::listing::Transaction;
use uuid::Uuid;

/// Inputs of the cancel control. Holds no state of its own; activation is
/// delegated to the caller's handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelButtonMaybe {
    pub show_button: bool,
    pub cancel_in_progress: bool,
    pub cancel_error: Option<String>,
}

impl CancelButtonMaybe {
    /// Whether activation would reach the handler
    pub fn is_enabled(&self) -> bool {
        self.show_button && !self.cancel_in_progress
    }

    /// Invoke `on_cancel` if the button is shown and not busy. Returns
    /// whether the handler ran.
    pub fn activate(&self, on_cancel: impl FnOnce()) -> bool {
        if !self.is_enabled() {
            return false;
        }
        on_cancel();
        true
    }
}

/// Transactions list with the per-transaction cancel status
#[derive(Debug, Clone, Default)]
pub struct TransactionPanelState {
    pub transactions: Vec<Transaction>,
    pub selected_index: usize,
    pub loading: bool,
    pub cancel_in_progress: Option<Uuid>,
    pub cancel_error: Option<(Uuid, String)>,
}

impl TransactionPanelState {
    pub fn selected(&self) -> Option<&Transaction> {
        self.transactions.get(self.selected_index)
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.transactions.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Replace the list, keeping the selection in range
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        if self.selected_index >= self.transactions.len() {
            self.selected_index = self.transactions.len().saturating_sub(1);
        }
        self.loading = false;
    }

    /// Replace one transaction by id
    pub fn upsert(&mut self, transaction: Transaction) {
        match self.transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(existing) => *existing = transaction,
            None => self.transactions.push(transaction),
        }
    }

    /// Cancel control for the selected transaction
    pub fn cancel_button(&self) -> CancelButtonMaybe {
        let Some(tx) = self.selected() else {
            return CancelButtonMaybe::default();
        };
        CancelButtonMaybe {
            show_button: tx.can_cancel(),
            cancel_in_progress: self.cancel_in_progress == Some(tx.id),
            cancel_error: self
                .cancel_error
                .as_ref()
                .filter(|(id, _)| *id == tx.id)
                .map(|(_, err)| err.clone()),
        }
    }
}
