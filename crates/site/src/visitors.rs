//! In-memory visitor registry.
//!
//! Each visitor (identified by a uuid kept in their session cookie) owns one
//! [`SiteState`] behind a mutex, plus the timer of its pending confirmation.
//! Visits expire after the configured idle time; nothing is persisted.
//!
//! # Confirmation timers
//!
//! The timer slot is reconciled with the state whenever a [`VisitGuard`] is
//! released:
//!
//! - the state has a pending ticket with no timer: a timer is spawned;
//! - the timer belongs to a ticket that is no longer pending: it is dropped,
//!   which aborts it.
//!
//! A running timer holds only a `Weak` reference to its visit, so an expired
//! visit is freed (and its timer aborted) even while a confirmation is up.

use std::sync::{Arc, Weak};
use std::time::Duration;

use moka::future::Cache;
use skyray_core::{Destination, ScrollRequest, SiteState, Ticket};
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::config::ConfirmationDelays;
use crate::error::add_breadcrumb;
use crate::tasks::ScopedTask;

/// Registry of live visits, keyed by visitor id.
#[derive(Clone)]
pub struct VisitorRegistry {
    visits: Cache<Uuid, Arc<Visit>>,
    delays: ConfirmationDelays,
}

impl VisitorRegistry {
    /// Create a registry that forgets visitors after `idle` without requests.
    #[must_use]
    pub fn new(idle: Duration, delays: ConfirmationDelays) -> Self {
        let visits = Cache::builder().time_to_idle(idle).build();
        Self { visits, delays }
    }

    /// The visit for `id`, starting a fresh one if there is none.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Visit> {
        let delays = self.delays;
        self.visits
            .get_with(id, async move {
                debug!(visitor = %id, "Starting visit");
                Arc::new(Visit::new(id, delays))
            })
            .await
    }

    /// The visit for `id`, if it is still live.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Visit>> {
        self.visits.get(&id).await
    }
}

/// One visitor's state.
pub struct Visit {
    id: Uuid,
    delays: ConfirmationDelays,
    inner: Mutex<VisitInner>,
}

struct VisitInner {
    site: SiteState,
    timer: Option<(Ticket, ScopedTask)>,
}

impl Visit {
    fn new(id: Uuid, delays: ConfirmationDelays) -> Self {
        Self {
            id,
            delays,
            inner: Mutex::new(VisitInner {
                site: SiteState::new(),
                timer: None,
            }),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Lock the visit for reading or mutating its state.
    pub async fn lock(self: &Arc<Self>) -> VisitGuard<'_> {
        VisitGuard {
            visit: self,
            inner: self.inner.lock().await,
        }
    }
}

/// Exclusive access to a visit's state. Timers are reconciled on drop.
pub struct VisitGuard<'a> {
    visit: &'a Arc<Visit>,
    inner: MutexGuard<'a, VisitInner>,
}

impl VisitGuard<'_> {
    #[must_use]
    pub fn visitor_id(&self) -> Uuid {
        self.visit.id
    }

    #[must_use]
    pub fn site(&self) -> &SiteState {
        &self.inner.site
    }

    pub fn site_mut(&mut self) -> &mut SiteState {
        &mut self.inner.site
    }

    /// Navigate and return the recorded scroll request.
    pub fn navigate(&mut self, destination: Destination) -> ScrollRequest {
        let mut scroll = ScrollRequest::new();
        let page = destination.page();
        self.inner.site.navigate(destination, &mut scroll);
        add_breadcrumb("navigation", "Viewed page", Some(&[("page", page.slug())]));
        scroll
    }

    /// Whether a confirmation timer is running for this visit.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.inner.timer.is_some()
    }

    fn reconcile_timer(&mut self) {
        let pending = self.inner.site.pending_ticket();
        let current = self.inner.timer.as_ref().map(|(ticket, _)| *ticket);
        if pending == current {
            return;
        }

        if let Some(ticket) = current {
            debug!(visitor = %self.visit.id, ticket = %ticket, "Cancelling confirmation timer");
        }
        self.inner.timer = None;

        if let (Some(ticket), Some(confirmation)) = (pending, self.inner.site.confirmation()) {
            let delay = self.visit.delays.for_confirmation(confirmation);
            debug!(
                visitor = %self.visit.id,
                ticket = %ticket,
                ?confirmation,
                ?delay,
                "Scheduling confirmation timer"
            );
            let task = spawn_timer(Arc::downgrade(self.visit), ticket, delay);
            self.inner.timer = Some((ticket, task));
        }
    }
}

impl Drop for VisitGuard<'_> {
    fn drop(&mut self) {
        self.reconcile_timer();
    }
}

/// Resolve `ticket` on the visit after `delay`, if both are still around.
fn spawn_timer(visit: Weak<Visit>, ticket: Ticket, delay: Duration) -> ScopedTask {
    ScopedTask::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(visit) = visit.upgrade() else {
            return;
        };

        let mut guard = visit.lock().await;
        if let Some((_, task)) = guard
            .inner
            .timer
            .take_if(|(pending, _)| *pending == ticket)
        {
            task.detach();
        }
        let mut scroll = ScrollRequest::new();
        if guard.inner.site.resolve(ticket, &mut scroll) {
            debug!(visitor = %visit.id, ticket = %ticket, "Confirmation elapsed");
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyray_core::{AcceptAllProvider, Credentials, Page, SubmitOutcome};

    use super::*;

    fn registry() -> VisitorRegistry {
        VisitorRegistry::new(Duration::from_secs(60), ConfirmationDelays::default())
    }

    async fn submitted_visit(registry: &VisitorRegistry) -> Arc<Visit> {
        let visit = registry.get_or_create(Uuid::new_v4()).await;
        let mut guard = visit.lock().await;
        let mut scroll = ScrollRequest::new();
        let site = guard.site_mut();
        site.login(
            &AcceptAllProvider,
            &Credentials::new("jane.doe@example.com", "x"),
            &mut scroll,
        )
        .unwrap();
        site.add_product("contactor").unwrap();
        site.navigate(Destination::Cart, &mut scroll);
        assert!(matches!(
            site.submit_quotation(&mut scroll),
            SubmitOutcome::Submitted(_)
        ));
        drop(guard);
        visit
    }

    #[tokio::test]
    async fn test_same_id_same_visit() {
        let registry = registry();
        let id = Uuid::new_v4();
        let first = registry.get_or_create(id).await;
        let second = registry.get_or_create(id).await;
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_clears_cart_after_delay() {
        let registry = registry();
        let visit = submitted_visit(&registry).await;
        assert!(visit.lock().await.has_timer());

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(visit.lock().await.site().cart().len(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let guard = visit.lock().await;
        assert!(guard.site().cart().is_empty());
        assert_eq!(guard.site().current_page(), Page::Home);
        assert!(!guard.has_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigating_away_cancels_timer() {
        let registry = registry();
        let visit = submitted_visit(&registry).await;

        {
            let mut guard = visit.lock().await;
            guard.navigate(Destination::Gallery);
        }
        assert!(!visit.lock().await.has_timer());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let guard = visit.lock().await;
        assert_eq!(guard.site().cart().len(), 1);
        assert_eq!(guard.site().current_page(), Page::Gallery);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_outliving_visit_is_harmless() {
        let registry = registry();
        let visit = submitted_visit(&registry).await;
        let id = visit.id();
        registry.visits.invalidate(&id).await;
        drop(visit);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(registry.get(id).await.is_none());
    }
}
