use crate::{
    Error, Res, lookup,
    spotify::Catalog,
    types::{ArtistView, TrackView},
    view,
};

/// Ticket handed out for each started lookup.
pub type Ticket = u64;

/// View state of one user: the latest track view and, on demand, its artist.
///
/// Only the most recently started lookup may write the view. Results of
/// older lookups that finish late are dropped.
#[derive(Debug, Default)]
pub struct LookupSession {
    issued: Ticket,
    view: Option<TrackView>,
    artist: Option<ArtistView>,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a lookup and discards whatever the previous one produced.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.view = None;
        self.artist = None;
        self.issued
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.issued
    }

    /// Stores `view` if `ticket` belongs to the latest lookup. Returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket, view: TrackView) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.view = Some(view);
        true
    }

    /// Returns whether a failure of `ticket` should still be shown to the user.
    pub fn fail(&self, ticket: Ticket) -> bool {
        self.is_current(ticket)
    }

    /// Forgets the current view and artist, e.g. after switching input mode.
    pub fn clear(&mut self) {
        self.view = None;
        self.artist = None;
    }

    pub fn view(&self) -> Option<&TrackView> {
        self.view.as_ref()
    }

    pub fn artist(&self) -> Option<&ArtistView> {
        self.artist.as_ref()
    }

    pub fn close_artist(&mut self) {
        self.artist = None;
    }

    pub fn artist_id(&self) -> Res<&str> {
        self.view
            .as_ref()
            .map(|v| v.artist_id.as_str())
            .filter(|id| !id.trim().is_empty())
            .ok_or(Error::NoArtistAvailable)
    }

    /// Fetches the primary artist of the current view and keeps it.
    pub async fn fetch_artist(&mut self, catalog: &dyn Catalog) -> Res<&ArtistView> {
        let artist_id = self.artist_id()?.to_string();
        let record = lookup::fetch_artist(catalog, &artist_id).await?;
        Ok(&*self.artist.insert(view::build_artist_view(&record)))
    }
}
