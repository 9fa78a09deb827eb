//! submission.rs
//!
//! Final validation and hand-off of a schedule batch to the backend.
//!
//! Local checks ran against a snapshot that may have gone stale while the
//! operator was editing, so submission re-fetches the persisted schedule,
//! re-runs the whole policy, and then still asks the server about every
//! slot. The server's 409 is final: one conflict aborts the submission and
//! nothing is created.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::backend_client::{BackendClient, BackendError};
use crate::config::Config;
use crate::error::ScheduleError;
use crate::models::{Movie, Showtime};
use crate::scheduling::{ScheduleBatch, SchedulePolicy};

pub struct SubmissionService {
    client: BackendClient,
    policy: SchedulePolicy,
}

impl SubmissionService {
    pub fn new(client: BackendClient, policy: SchedulePolicy) -> Self {
        Self { client, policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            BackendClient::from_config(&config.backend),
            SchedulePolicy::from_config(&config.scheduling),
        )
    }

    /// Pushes the batch through the three submission stages: re-validate
    /// against fresh server state, per-slot server check, batch create.
    /// Returns the persisted showtimes with their server-assigned ids.
    pub async fn submit(
        &self,
        batch: ScheduleBatch,
        movie: &Movie,
        now: NaiveDateTime,
    ) -> Result<Vec<Showtime>, ScheduleError> {
        if batch.is_empty() {
            debug!("Submission skipped: batch is empty");
            return Ok(Vec::new());
        }
        let drafts = batch.into_drafts();
        info!("Submitting a batch of {} showtimes", drafts.len());

        // one fresh fetch per (room, date) the batch touches
        let mut fresh: BTreeMap<(i64, NaiveDate), Vec<Showtime>> = BTreeMap::new();
        for draft in &drafts {
            let key = (draft.room_id, draft.show_date);
            if !fresh.contains_key(&key) {
                let listed = self.client.list_showtimes(draft.room_id, draft.show_date).await?;
                fresh.insert(key, listed);
            }
        }

        // the snapshot used at edit time may be stale; re-run every draft in
        // batch order against what the server has now
        for (index, draft) in drafts.iter().enumerate() {
            let persisted = fresh
                .get(&(draft.room_id, draft.show_date))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            self.policy
                .validate_draft(draft, movie, persisted, &drafts[..index], now)?;
        }

        // the server gets the last word on every slot before anything is
        // written
        for draft in &drafts {
            match self.client.check_slot(&draft.slot()).await {
                Ok(()) => {}
                Err(BackendError::Conflict { message }) => {
                    warn!(
                        room_id = draft.room_id,
                        show_date = %draft.show_date,
                        start_time = %draft.start_time,
                        "Server rejected slot, aborting submission"
                    );
                    return Err(ScheduleError::ServerConflict { message });
                }
                Err(other) => return Err(other.into()),
            }
        }

        match self.client.create_showtimes(&drafts).await {
            Ok(created) => {
                info!("Batch persisted: {} showtimes created", created.len());
                Ok(created)
            }
            // a slot can still be lost between the check and the create
            Err(BackendError::Conflict { message }) => {
                Err(ScheduleError::ServerConflict { message })
            }
            Err(other) => Err(other.into()),
        }
    }
}
