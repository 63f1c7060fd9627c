use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{watch, RwLock};
use tracing::{debug, error, info, warn};

use crate::modules::content::application::ports::outgoing::{
    HealthStatus, MirrorStore, ResourceApi, ResourceApiError,
};
use crate::modules::content::application::services::fallback_id::FallbackIdGenerator;
use crate::modules::content::application::services::load_report::{LoadReport, LoadSource};
use crate::modules::content::application::services::records;
use crate::modules::content::domain::{
    Achievement, CodingPlatform, ContentEntity, Internship, PortfolioState, Profile, Project,
    RecordKey, RecordMeta, Resource, SkillGroup, SocialLink, ValidationError, RESUME_MIRROR_KEY,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
// Internal to the controller: every variant degrades to a cached or
// optimistic value and is only logged.
//

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ResourceApiError),

    #[error("Failed to encode body: {0}")]
    Encode(String),

    #[error("Failed to decode body: {0}")]
    Decode(String),

    #[error("Created record has no authoritative id")]
    MissingAuthoritativeId,

    #[error("Bootstrap task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

type FetchResult = Result<Value, ResourceApiError>;

struct Fetched {
    projects: FetchResult,
    skills: FetchResult,
    achievements: FetchResult,
    internships: FetchResult,
    platforms: FetchResult,
    social_links: FetchResult,
    profile: FetchResult,
}

//
// ──────────────────────────────────────────────────────────
// Controller
// ──────────────────────────────────────────────────────────
//

/// Single owner of the portfolio state for a session.
///
/// Reads are served from memory. Writes go to the Resource API first and
/// fall back to an optimistic local change when it fails; either way the
/// touched collection is re-mirrored. There is no retry: a later `load()`
/// restores whatever the API holds.
pub struct PortfolioSync {
    api: Arc<dyn ResourceApi>,
    mirror: Arc<dyn MirrorStore>,
    state: RwLock<PortfolioState>,
    fallback_ids: FallbackIdGenerator,
    loading: watch::Sender<bool>,
}

impl PortfolioSync {
    pub fn new(api: Arc<dyn ResourceApi>, mirror: Arc<dyn MirrorStore>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            api,
            mirror,
            state: RwLock::new(PortfolioState::default()),
            fallback_ids: FallbackIdGenerator::new(),
            loading,
        }
    }

    // ------------------------
    // Bootstrap
    // ------------------------

    /// Fetches every collection concurrently and settles each one on its
    /// own: API response, else mirror, else default. Never fails.
    pub async fn load(&self) -> LoadReport {
        self.loading.send_replace(true);
        info!("Loading portfolio content");

        let fetched = self.fetch_all().await;

        let mut state = self.state.write().await;
        let report = match fetched {
            Ok(fetched) => self.adopt_all(&mut state, fetched),
            Err(e) => {
                error!(error = %e, "Bootstrap failed, restoring every collection from the mirror");
                self.restore_all(&mut state)
            }
        };
        self.mirror_all(&state);
        drop(state);

        self.loading.send_replace(false);
        info!(
            remote = report.count(LoadSource::Remote),
            mirror = report.count(LoadSource::Mirror),
            default = report.count(LoadSource::Default),
            "Portfolio content loaded"
        );
        report
    }

    async fn fetch_all(&self) -> Result<Fetched, SyncError> {
        let list = |resource: Resource| {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move { api.list(resource).await })
        };
        let profile = {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move { api.fetch_profile().await })
        };

        let (projects, skills, achievements, internships, platforms, social_links, profile) =
            futures::join!(
                list(Resource::Projects),
                list(Resource::Skills),
                list(Resource::Achievements),
                list(Resource::Internships),
                list(Resource::Platforms),
                list(Resource::SocialLinks),
                profile
            );

        Ok(Fetched {
            projects: projects?,
            skills: skills?,
            achievements: achievements?,
            internships: internships?,
            platforms: platforms?,
            social_links: social_links?,
            profile: profile?,
        })
    }

    fn adopt_all(&self, state: &mut PortfolioState, fetched: Fetched) -> LoadReport {
        let mut report = LoadReport::default();
        report.record(Resource::Projects, self.adopt::<Project>(state, fetched.projects));
        report.record(Resource::Skills, self.adopt::<SkillGroup>(state, fetched.skills));
        report.record(
            Resource::Achievements,
            self.adopt::<Achievement>(state, fetched.achievements),
        );
        report.record(
            Resource::Internships,
            self.adopt::<Internship>(state, fetched.internships),
        );
        report.record(
            Resource::Platforms,
            self.adopt::<CodingPlatform>(state, fetched.platforms),
        );
        report.record(
            Resource::SocialLinks,
            self.adopt::<SocialLink>(state, fetched.social_links),
        );
        report.record(Resource::Profile, self.adopt_profile(state, fetched.profile));
        report
    }

    fn restore_all(&self, state: &mut PortfolioState) -> LoadReport {
        let mut report = LoadReport::default();
        report.record(Resource::Projects, self.restore::<Project>(state));
        report.record(Resource::Skills, self.restore::<SkillGroup>(state));
        report.record(Resource::Achievements, self.restore::<Achievement>(state));
        report.record(Resource::Internships, self.restore::<Internship>(state));
        report.record(Resource::Platforms, self.restore::<CodingPlatform>(state));
        report.record(Resource::SocialLinks, self.restore::<SocialLink>(state));
        report.record(Resource::Profile, self.restore_profile(state));
        report
    }

    fn adopt<T: ContentEntity>(
        &self,
        state: &mut PortfolioState,
        fetched: FetchResult,
    ) -> LoadSource {
        match fetched
            .map_err(SyncError::from)
            .and_then(decode_value::<Vec<T>>)
        {
            Ok(records) => {
                *T::collection_mut(state) = records;
                LoadSource::Remote
            }
            Err(e) => {
                warn!(resource = %T::RESOURCE, error = %e, "Fetch failed, falling back to mirror");
                self.restore::<T>(state)
            }
        }
    }

    fn restore<T: ContentEntity>(&self, state: &mut PortfolioState) -> LoadSource {
        match self.read_mirror::<Vec<T>>(T::RESOURCE.mirror_key()) {
            Some(records) => {
                *T::collection_mut(state) = records;
                LoadSource::Mirror
            }
            None => LoadSource::Default,
        }
    }

    fn adopt_profile(&self, state: &mut PortfolioState, fetched: FetchResult) -> LoadSource {
        match fetched
            .map_err(SyncError::from)
            .and_then(decode_value::<Profile>)
        {
            Ok(profile) => {
                state.profile = profile;
                LoadSource::Remote
            }
            Err(e) => {
                warn!(resource = %Resource::Profile, error = %e, "Fetch failed, falling back to mirror");
                self.restore_profile(state)
            }
        }
    }

    fn restore_profile(&self, state: &mut PortfolioState) -> LoadSource {
        let mut source = LoadSource::Default;

        if let Some(profile) = self.read_mirror::<Profile>(Resource::Profile.mirror_key()) {
            state.profile = profile;
            source = LoadSource::Mirror;
        }

        // The resume entry is stored raw and wins over the profile copy.
        match self.mirror.read(RESUME_MIRROR_KEY) {
            Ok(Some(resume)) => {
                state.profile.resume = resume;
                source = LoadSource::Mirror;
            }
            Ok(None) => {}
            Err(e) => warn!(key = RESUME_MIRROR_KEY, error = %e, "Failed to read mirror"),
        }

        source
    }

    // ------------------------
    // List mutations
    // ------------------------

    /// Creates `record` remotely and appends the stored copy. When the API
    /// call fails the input is appended under a fresh fallback id instead.
    pub async fn add<T: ContentEntity>(&self, record: T) -> T {
        let outcome = self.create_remote(&record).await;

        let mut state = self.state.write().await;
        let collection = T::collection_mut(&mut state);
        let stored = match outcome {
            Ok(created) => {
                debug!(resource = %T::RESOURCE, id = ?created.meta().authoritative_id, "Record created");
                created
            }
            Err(e) => {
                let taken = records::fallback_ids(collection.as_slice());
                let fallback_id = self.fallback_ids.next_unused(&taken);
                warn!(
                    resource = %T::RESOURCE,
                    fallback_id,
                    error = %e,
                    "Create failed, keeping local copy"
                );
                let mut local = record;
                *local.meta_mut() = RecordMeta::fallback(fallback_id);
                local
            }
        };
        collection.push(stored.clone());
        self.mirror_collection::<T>(&state);

        stored
    }

    /// Validates like the editor form does, then adds.
    pub async fn submit<T: ContentEntity>(&self, record: T) -> Result<T, ValidationError> {
        record.validate()?;
        Ok(self.add(record).await)
    }

    /// Replaces the matching record with the server's copy, or shallow-merges
    /// `patch` into it when the API call fails. No-op without a match.
    pub async fn update<T: ContentEntity>(&self, key: &RecordKey, patch: T::Patch) -> Option<T> {
        let outcome = self.update_remote::<T>(key, &patch).await;

        let mut state = self.state.write().await;
        let updated = match records::find_mut(T::collection_mut(&mut state).as_mut_slice(), key) {
            Some(record) => {
                match outcome {
                    Ok(server_copy) => {
                        debug!(resource = %T::RESOURCE, %key, "Record updated");
                        *record = server_copy;
                    }
                    Err(e) => {
                        warn!(resource = %T::RESOURCE, %key, error = %e, "Update failed, merging locally");
                        record.apply_patch(&patch);
                    }
                }
                Some(record.clone())
            }
            None => {
                debug!(resource = %T::RESOURCE, %key, "No record matches, nothing to update");
                None
            }
        };
        self.mirror_collection::<T>(&state);

        updated
    }

    /// Deletes remotely and removes the matching record whatever the
    /// outcome of the API call.
    pub async fn remove<T: ContentEntity>(&self, key: &RecordKey) -> Option<T> {
        match self.api.delete(T::RESOURCE, &key.to_string()).await {
            Ok(_) => debug!(resource = %T::RESOURCE, %key, "Record deleted"),
            Err(e) => {
                warn!(resource = %T::RESOURCE, %key, error = %e, "Delete failed, removing local copy anyway")
            }
        }

        let mut state = self.state.write().await;
        let removed = records::take(T::collection_mut(&mut state), key);
        self.mirror_collection::<T>(&state);

        removed
    }

    /// Re-reads one record from the API and replaces the local copy. The
    /// local copy is kept when the read fails.
    pub async fn refresh<T: ContentEntity>(&self, key: &RecordKey) -> Option<T> {
        let fetched = self
            .api
            .get(T::RESOURCE, &key.to_string())
            .await
            .map_err(SyncError::from)
            .and_then(decode_value::<T>);

        let mut state = self.state.write().await;
        let local = records::find_mut(T::collection_mut(&mut state).as_mut_slice(), key);
        let refreshed = match (local, fetched) {
            (Some(record), Ok(server_copy)) => {
                *record = server_copy;
                Some(record.clone())
            }
            (Some(record), Err(e)) => {
                warn!(resource = %T::RESOURCE, %key, error = %e, "Refresh failed, keeping local copy");
                Some(record.clone())
            }
            (None, _) => None,
        };
        self.mirror_collection::<T>(&state);

        refreshed
    }

    async fn create_remote<T: ContentEntity>(&self, record: &T) -> Result<T, SyncError> {
        let body = encode_value(record)?;
        let created: T = decode_value(self.api.create(T::RESOURCE, body).await?)?;
        if !created.meta().is_synced() {
            return Err(SyncError::MissingAuthoritativeId);
        }
        Ok(created)
    }

    async fn update_remote<T: ContentEntity>(
        &self,
        key: &RecordKey,
        patch: &T::Patch,
    ) -> Result<T, SyncError> {
        let body = encode_value(patch)?;
        let updated = self
            .api
            .update(T::RESOURCE, &key.to_string(), body)
            .await?;
        decode_value(updated)
    }

    // ------------------------
    // Profile singleton
    // ------------------------

    /// Replaces the profile immediately, then persists it. A failed save is
    /// logged and the local copy stays.
    pub async fn update_profile(&self, profile: Profile) {
        {
            let mut state = self.state.write().await;
            state.profile = profile.clone();
            self.mirror_profile(&state);
        }
        self.save_profile(&profile).await;
    }

    /// Sets only the resume field and persists the merged profile. An empty
    /// string removes the resume.
    pub async fn update_resume(&self, resume: impl Into<String>) {
        let merged = {
            let mut state = self.state.write().await;
            state.profile.resume = resume.into();
            self.mirror_profile(&state);
            state.profile.clone()
        };
        self.save_profile(&merged).await;
    }

    async fn save_profile(&self, profile: &Profile) {
        match self.push_profile(profile).await {
            Ok(_) => debug!("Profile saved"),
            Err(e) => warn!(error = %e, "Profile save failed, keeping local copy"),
        }
    }

    async fn push_profile(&self, profile: &Profile) -> Result<Value, SyncError> {
        let body = encode_value(profile)?;
        Ok(self.api.save_profile(body).await?)
    }

    // ------------------------
    // Readers
    // ------------------------

    pub async fn snapshot(&self) -> PortfolioState {
        self.state.read().await.clone()
    }

    pub async fn records<T: ContentEntity>(&self) -> Vec<T> {
        let state = self.state.read().await;
        T::collection(&state).clone()
    }

    pub async fn profile(&self) -> Profile {
        self.state.read().await.profile.clone()
    }

    pub async fn resume(&self) -> String {
        self.state.read().await.profile.resume.clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Observe the loading flag; it flips to true for the duration of `load()`.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub async fn health(&self) -> Result<HealthStatus, ResourceApiError> {
        self.api.health().await
    }

    // ------------------------
    // Mirror helpers
    // ------------------------

    fn mirror_all(&self, state: &PortfolioState) {
        self.mirror_collection::<Project>(state);
        self.mirror_collection::<SkillGroup>(state);
        self.mirror_collection::<Achievement>(state);
        self.mirror_collection::<Internship>(state);
        self.mirror_collection::<CodingPlatform>(state);
        self.mirror_collection::<SocialLink>(state);
        self.mirror_profile(state);
    }

    fn mirror_collection<T: ContentEntity>(&self, state: &PortfolioState) {
        self.write_mirror(T::RESOURCE.mirror_key(), T::collection(state));
    }

    fn mirror_profile(&self, state: &PortfolioState) {
        self.write_mirror(Resource::Profile.mirror_key(), &state.profile);
        if let Err(e) = self.mirror.write(RESUME_MIRROR_KEY, &state.profile.resume) {
            warn!(key = RESUME_MIRROR_KEY, error = %e, "Failed to write mirror");
        }
    }

    fn write_mirror<V: Serialize + ?Sized>(&self, key: &str, value: &V) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode mirror entry");
                return;
            }
        };
        if let Err(e) = self.mirror.write(key, &encoded) {
            warn!(key, error = %e, "Failed to write mirror");
        }
    }

    fn read_mirror<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        match self.mirror.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "Ignoring undecodable mirror entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read mirror");
                None
            }
        }
    }
}

fn encode_value<V: Serialize + ?Sized>(value: &V) -> Result<Value, SyncError> {
    serde_json::to_value(value).map_err(|e| SyncError::Encode(e.to_string()))
}

fn decode_value<V: DeserializeOwned>(value: Value) -> Result<V, SyncError> {
    serde_json::from_value(value).map_err(|e| SyncError::Decode(e.to_string()))
}
