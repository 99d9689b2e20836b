// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense ledger manager: an in-memory, newest-first entry list backed
//! by a remote store when reachable and a locally persisted pending buffer
//! when not. All reads go through the in-memory list; derived views never
//! touch storage or the network.

use rusqlite::Connection;

use crate::api::{ApiError, ExpensePayload, RemoteStore};
use crate::error::{LedgerError, Result};
use crate::models::{Entry, EntryId, NewEntry};
use crate::store;

/// Credential and connectivity, injected at construction. The auth
/// subsystem owns the token lifecycle; the ledger only consumes it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub online: bool,
}

impl Session {
    pub fn new(token: Option<String>, online: bool) -> Self {
        Session { token, online }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The remote store confirmed the create; entries were reloaded.
    Synced,
    /// The entry was buffered locally under a temporary identifier.
    Buffered(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Remote,
    Buffered,
}

/// Outcome of a pending-buffer flush. Items whose remote create failed stay
/// in the buffer for the next attempt; `retained` counts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    pub retained: usize,
}

pub struct Ledger<'a, R: RemoteStore> {
    conn: &'a mut Connection,
    remote: &'a R,
    session: Session,
    entries: Vec<Entry>,
}

fn storage<T>(res: anyhow::Result<T>) -> Result<T> {
    res.map_err(|e| LedgerError::Storage(format!("{:#}", e)))
}

impl<'a, R: RemoteStore> Ledger<'a, R> {
    pub fn new(conn: &'a mut Connection, remote: &'a R, session: Session) -> Self {
        Ledger {
            conn,
            remote,
            session,
            entries: Vec::new(),
        }
    }

    /// Immutable snapshot of the current list, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Flushes the pending buffer, then re-derives `entries` from the remote
    /// store. Unreachable degrades to showing only the pending buffer;
    /// an auth rejection propagates instead of falling back, since the
    /// credential is the problem rather than the network.
    pub fn load(&mut self) -> Result<SyncReport> {
        let report = self.flush_pending()?;
        self.refresh()?;
        Ok(report)
    }

    /// Explicit sync: identical cycle to `load`, named for the
    /// connectivity-regained trigger.
    pub fn sync(&mut self) -> Result<SyncReport> {
        self.load()
    }

    pub fn add(&mut self, new: NewEntry) -> Result<AddOutcome> {
        if self.session.online {
            if let Some(token) = self.session.token.clone() {
                let payload = ExpensePayload::from_new(&new);
                match self.remote.create(&token, &payload) {
                    Ok(_) => {
                        self.load()?;
                        return Ok(AddOutcome::Synced);
                    }
                    Err(err) => {
                        // The add is never lost, only deferred.
                        eprintln!("remote create failed, buffering locally: {:?}", err);
                    }
                }
            }
        }
        self.buffer_add(new)
    }

    pub fn delete(&mut self, id: EntryId) -> Result<DeleteOutcome> {
        match id {
            EntryId::Local(_) => {
                let pending = storage(store::load_pending(self.conn))?;
                let kept: Vec<Entry> = pending.into_iter().filter(|e| e.id != id).collect();
                storage(store::replace_pending(self.conn, &kept))?;
                self.entries.retain(|e| e.id != id);
                Ok(DeleteOutcome::Buffered)
            }
            EntryId::Server(n) => {
                if !self.session.online {
                    return Err(LedgerError::Unreachable(
                        "offline: deleting a synced entry requires connectivity".into(),
                    ));
                }
                let token = self
                    .session
                    .token
                    .clone()
                    .ok_or(LedgerError::Unauthenticated)?;
                // A failed remote delete leaves `entries` unchanged; there is
                // no delete-side offline queue.
                self.remote.delete(&token, n).map_err(LedgerError::from)?;
                self.entries.retain(|e| e.id != id);
                Ok(DeleteOutcome::Remote)
            }
        }
    }

    fn buffer_add(&mut self, new: NewEntry) -> Result<AddOutcome> {
        let entry = new.into_local_entry();
        let mut pending = storage(store::load_pending(self.conn))?;
        pending.push(entry.clone());
        storage(store::replace_pending(self.conn, &pending))?;
        let id = entry.id;
        self.entries.insert(0, entry);
        Ok(AddOutcome::Buffered(id))
    }

    /// Walks the pending buffer in insertion order, creating each entry
    /// remotely with its temporary identifier stripped. Per-item failures
    /// are logged and retained; only confirmed entries leave the buffer.
    fn flush_pending(&mut self) -> Result<SyncReport> {
        let pending = storage(store::load_pending(self.conn))?;
        if pending.is_empty() {
            return Ok(SyncReport::default());
        }
        let token = match (&self.session.token, self.session.online) {
            (Some(t), true) => t.clone(),
            _ => {
                return Ok(SyncReport {
                    synced: 0,
                    retained: pending.len(),
                });
            }
        };
        let mut retained = Vec::new();
        let mut synced = 0usize;
        for entry in pending {
            let payload = ExpensePayload::from_entry(&entry);
            match self.remote.create(&token, &payload) {
                Ok(_) => synced += 1,
                Err(err) => {
                    eprintln!("sync failed for buffered entry {}: {:?}", entry.id, err);
                    retained.push(entry);
                }
            }
        }
        let report = SyncReport {
            synced,
            retained: retained.len(),
        };
        storage(store::replace_pending(self.conn, &retained))?;
        Ok(report)
    }

    fn refresh(&mut self) -> Result<()> {
        if !self.session.online {
            self.entries = storage(store::load_pending(self.conn))?;
            self.entries.reverse(); // newest first
            return Ok(());
        }
        let token = self
            .session
            .token
            .clone()
            .ok_or(LedgerError::Unauthenticated)?;
        match self.remote.list(&token) {
            Ok(remote_entries) => {
                let mut entries: Vec<Entry> =
                    remote_entries.into_iter().map(|r| r.into_entry()).collect();
                entries.sort_by(|a, b| {
                    let key = |id: &EntryId| match id {
                        EntryId::Server(n) => *n,
                        EntryId::Local(n) => *n,
                    };
                    key(&b.id).cmp(&key(&a.id))
                });
                // Buffered leftovers (a partial flush) still belong in the
                // view, ahead of the synced history.
                let mut pending = storage(store::load_pending(self.conn))?;
                pending.reverse();
                pending.extend(entries);
                self.entries = pending;
                Ok(())
            }
            Err(ApiError::Unauthenticated) => Err(LedgerError::Unauthenticated),
            Err(ApiError::Unreachable(msg)) => {
                eprintln!("remote list failed, showing buffered entries only: {}", msg);
                self.entries = storage(store::load_pending(self.conn))?;
                self.entries.reverse();
                Ok(())
            }
        }
    }
}
