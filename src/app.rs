//! Application state and core logic

use crate::config::MarketplaceConfig;
use crate::data::{ListingStore, StoreError};
use crate::i18n::{Catalog, Messages};
use crate::state::forms::{FetchErrors, Form, GeneralValues, ListingValues};
use crate::state::{AppState, Listing, Transaction, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Result of a save round-trip started from one of the form tabs
#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Listing),
    CreateDraftFailed(StoreError),
    UpdateFailed(StoreError),
}

/// Completion of a background data layer call
#[derive(Debug)]
pub enum StoreEvent {
    ListingSubmitted { tab: View, outcome: SubmitOutcome },
    ListingShown(Result<Listing, StoreError>),
    TransactionsLoaded(Result<Vec<Transaction>, StoreError>),
    TransactionCancelled {
        id: Uuid,
        result: Result<Transaction, StoreError>,
    },
}

enum SubmitRequest {
    CreateDraft(GeneralValues),
    Update {
        id: Uuid,
        values: ListingValues,
        publish: bool,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Message catalog used for every user-facing string
    pub messages: Catalog,
    store: Arc<dyn ListingStore>,
    events_tx: UnboundedSender<StoreEvent>,
    events_rx: UnboundedReceiver<StoreEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(store: Arc<dyn ListingStore>, market: MarketplaceConfig, messages: Catalog) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(market),
            messages,
            store,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Kick off the initial loads. Must be called inside a tokio runtime.
    pub fn start(&mut self, listing_id: Option<Uuid>) {
        if let Some(id) = listing_id {
            self.state.listing_loading = true;
            let store = Arc::clone(&self.store);
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(StoreEvent::ListingShown(store.show_listing(id).await));
            });
        }
        self.reload_transactions();
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply every completed background call without blocking
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        self.state.status_message = None;

        let target = match key.code {
            KeyCode::F(1) => Some(View::General),
            KeyCode::F(2) => Some(View::Pricing),
            KeyCode::F(3) => Some(View::Transactions),
            _ => None,
        };
        if let Some(view) = target {
            self.navigate(view);
            return;
        }

        if self.state.current_view.is_form_view() {
            self.handle_form_key(key);
        } else {
            self.handle_transactions_key(key);
        }
    }

    pub fn navigate(&mut self, view: View) {
        self.state.current_view = view;
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let save = (key.code == KeyCode::Char('s')
            && key.modifiers.contains(KeyModifiers::CONTROL))
            || (key.code == KeyCode::Char('w')
                && key.modifiers.contains(crate::platform::SAVE_MODIFIER));
        let on_submit = self
            .state
            .active_form_mut()
            .is_some_and(|form| form.is_submit_active());
        if save || (on_submit && key.code == KeyCode::Enter) {
            self.submit_active_form();
            return;
        }

        let Some(form) = self.state.active_form_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            _ => {
                let Some(field) = form.get_active_field_mut() else {
                    return;
                };
                if field.is_choice() {
                    match key.code {
                        KeyCode::Left | KeyCode::Up => field.prev_option(),
                        KeyCode::Right | KeyCode::Down => field.next_option(),
                        KeyCode::Char(' ') | KeyCode::Enter => field.toggle_option(),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char(c) => field.push_char(c),
                        KeyCode::Backspace => field.pop_char(),
                        KeyCode::Enter if field.is_multiline() => field.push_char('\n'),
                        _ => {}
                    }
                }
            }
        }
    }

    fn handle_transactions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.transactions.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.transactions.move_selection_up(),
            KeyCode::Char('c') | KeyCode::Enter => self.cancel_selected_transaction(),
            KeyCode::Char('r') => self.reload_transactions(),
            _ => {}
        }
    }

    /// Validate the form on screen and hand its values to the store
    pub fn submit_active_form(&mut self) {
        let view = self.state.current_view;
        let Some(props) = self.state.active_props() else {
            return;
        };
        let Some(form) = self.state.active_form_mut() else {
            return;
        };
        let Some(values) = form.submit(&props) else {
            tracing::debug!("Submit on {view:?} refused by form state");
            return;
        };

        let request = match (values, self.state.listing.as_ref()) {
            (ListingValues::General(general), None) => SubmitRequest::CreateDraft(general),
            (values, Some(listing)) => SubmitRequest::Update {
                id: listing.id,
                publish: matches!(values, ListingValues::Pricing(_)) && !listing.is_published(),
                values,
            },
            (ListingValues::Pricing(_), None) => {
                tracing::warn!("Pricing submitted without a listing");
                return;
            }
        };

        if let Some(status) = self.state.status_mut(view) {
            status.update_in_progress = true;
            status.fetch_errors = FetchErrors::default();
        }

        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = match request {
                SubmitRequest::CreateDraft(values) => {
                    match store.create_listing_draft(values).await {
                        Ok(listing) => SubmitOutcome::Saved(listing),
                        Err(e) => SubmitOutcome::CreateDraftFailed(e),
                    }
                }
                SubmitRequest::Update {
                    id,
                    values,
                    publish,
                } => match store.update_listing(id, values, publish).await {
                    Ok(listing) => SubmitOutcome::Saved(listing),
                    Err(e) => SubmitOutcome::UpdateFailed(e),
                },
            };
            let _ = tx.send(StoreEvent::ListingSubmitted { tab: view, outcome });
        });
    }

    /// Cancel the selected transaction if its cancel button is live
    pub fn cancel_selected_transaction(&mut self) {
        let Some(id) = self.state.transactions.selected().map(|t| t.id) else {
            return;
        };
        let button = self.state.transactions.cancel_button();
        let transactions = &mut self.state.transactions;
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        button.activate(|| {
            transactions.cancel_in_progress = Some(id);
            transactions.cancel_error = None;
            tokio::spawn(async move {
                let result = store.cancel_transaction(id).await;
                let _ = tx.send(StoreEvent::TransactionCancelled { id, result });
            });
        });
    }

    pub fn reload_transactions(&mut self) {
        self.state.transactions.loading = true;
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(StoreEvent::TransactionsLoaded(
                store.list_transactions().await,
            ));
        });
    }

    /// Fold a completed data layer call back into the state
    pub fn handle_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ListingSubmitted { tab, outcome } => self.handle_submitted(tab, outcome),
            StoreEvent::ListingShown(Ok(listing)) => {
                tracing::info!("Loaded listing {}", listing.id);
                self.state.load_listing(listing);
            }
            StoreEvent::ListingShown(Err(e)) => {
                tracing::error!("Failed to load listing: {e}");
                self.state.listing_loading = false;
                self.state.general_status.fetch_errors.show_listings_error = Some(e.to_string());
                self.state.pricing_status.fetch_errors.show_listings_error = Some(e.to_string());
            }
            StoreEvent::TransactionsLoaded(Ok(transactions)) => {
                self.state.transactions.set_transactions(transactions);
            }
            StoreEvent::TransactionsLoaded(Err(e)) => {
                tracing::error!("Failed to load transactions: {e}");
                self.state.transactions.loading = false;
                self.state
                    .push_error(self.messages.text("TransactionPanel.loadFailed"));
            }
            StoreEvent::TransactionCancelled { id, result } => {
                if self.state.transactions.cancel_in_progress == Some(id) {
                    self.state.transactions.cancel_in_progress = None;
                }
                match result {
                    Ok(transaction) => {
                        tracing::info!("Transaction {id} cancelled");
                        self.state.transactions.upsert(transaction);
                        self.state.status_message =
                            Some(self.messages.text("TransactionPanel.cancelled"));
                    }
                    Err(e) => {
                        tracing::error!("Failed to cancel transaction {id}: {e}");
                        self.state.transactions.cancel_error = Some((id, e.to_string()));
                    }
                }
            }
        }
    }

    fn handle_submitted(&mut self, tab: View, outcome: SubmitOutcome) {
        let first_draft = self.state.listing.is_none();
        let was_published = self
            .state
            .listing
            .as_ref()
            .is_some_and(Listing::is_published);

        match outcome {
            SubmitOutcome::Saved(listing) => {
                let newly_published = !was_published && listing.is_published();
                self.state.apply_saved_listing(tab, listing);
                for view in [View::General, View::Pricing] {
                    if let Some(status) = self.state.status_mut(view) {
                        status.updated = view == tab;
                        if view == tab {
                            status.update_in_progress = false;
                            status.fetch_errors = FetchErrors::default();
                        }
                    }
                }
                if newly_published {
                    self.state.new_listing_published = true;
                    self.state.status_message =
                        Some(self.messages.text("EditListingWizard.listingPublished"));
                } else {
                    self.state.status_message =
                        Some(self.messages.text("EditListingWizard.listingSaved"));
                }
                if first_draft && tab == View::General {
                    self.navigate(View::Pricing);
                }
            }
            SubmitOutcome::CreateDraftFailed(e) => {
                tracing::error!("Failed to create listing draft: {e}");
                if let Some(status) = self.state.status_mut(tab) {
                    status.update_in_progress = false;
                    status.fetch_errors.create_listing_draft_error = Some(e.to_string());
                }
            }
            SubmitOutcome::UpdateFailed(e) => {
                tracing::error!("Failed to update listing: {e}");
                if let Some(status) = self.state.status_mut(tab) {
                    status.update_in_progress = false;
                    status.fetch_errors.update_listing_error = Some(e.to_string());
                }
            }
        }
    }
}
