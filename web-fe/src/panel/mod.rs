use std::cell::Cell;

use log::{debug, error, info, warn};

use crate::{
    error::{FetchError, SubmitError},
    model::{event::EventRow, form::EventForm},
    service::event_api::EventApi,
    sys::locale::Locale,
};

/// What the panel needs from the page it is mounted on.
pub trait EventView {
    /// Replaces every rendered row.
    fn render_events(&self, rows: Vec<EventRow>);
    fn reset_form(&self);
    fn set_busy(&self, busy: bool);
    /// Blocking notice to the user.
    fn alert(&self, msg: &str);
}

/// Lists events and creates new ones against the events endpoint.
///
/// Both operations report failures themselves (log + alert) and return
/// whether their visible effect happened. Only the most recently started
/// load may touch the view.
pub struct EventPanel<A, V, L> {
    api: A,
    view: V,
    locale: L,
    submitting: Cell<bool>,
    load_seq: Cell<u64>,
}

impl<A, V, L> EventPanel<A, V, L>
where
    A: EventApi,
    V: EventView,
    L: Locale,
{
    pub fn new(api: A, view: V, locale: L) -> Self {
        Self {
            api,
            view,
            locale,
            submitting: Cell::new(false),
            load_seq: Cell::new(0),
        }
    }

    pub async fn load_events(&self) -> bool {
        let seq = self.load_seq.get() + 1;
        self.load_seq.set(seq);

        let result = self.fetch_rows().await;
        if self.load_seq.get() != seq {
            debug!("drop stale event list response #{seq}");
            return false;
        }

        match result {
            Ok(rows) => {
                self.view.render_events(rows);
                true
            }
            Err(err) => {
                error!("Error fetching events: {err}");
                self.view.alert(&format!("Failed to fetch events: {err}"));
                false
            }
        }
    }

    pub async fn submit_event(&self, form: EventForm) -> bool {
        if self.submitting.replace(true) {
            warn!("ignore submit, previous one still pending");
            return false;
        }
        self.view.set_busy(true);

        let created = match self.create(form).await {
            Ok(()) => {
                self.load_events().await;
                self.view.reset_form();
                true
            }
            Err(err) => {
                error!("Error creating event: {err}");
                self.view.alert(&format!("Failed to create event: {err}"));
                false
            }
        };

        self.view.set_busy(false);
        self.submitting.set(false);
        created
    }

    async fn fetch_rows(&self) -> Result<Vec<EventRow>, FetchError> {
        let events = self.api.list_events().await?;
        Ok(events
            .iter()
            .map(|event| EventRow::from_event(event, &self.locale))
            .collect())
    }

    async fn create(&self, form: EventForm) -> Result<(), SubmitError> {
        let submission = form.into_submission(&self.locale)?;
        let receipt = self
            .api
            .create_event(&submission.draft, &submission.csrf_token)
            .await?;
        if let Some(receipt) = receipt {
            info!("{} (id: {})", receipt.message, receipt.event_id);
        }
        Ok(())
    }
}
