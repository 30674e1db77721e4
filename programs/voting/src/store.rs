use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::error::VotingError;

/// Raw account data held at a derived address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredRecord {
    /// Program that created the record and is allowed to write it
    pub owner: Pubkey,
    /// Discriminator followed by the Borsh encoding, fixed size
    pub data: Vec<u8>,
}

/// Persistent key-value layer for program records.
///
/// Implementations only need point reads and an all-or-nothing commit;
/// typed create/read/update goes through [`Transaction`].
pub trait RecordStore {
    fn get(&self, address: &Pubkey) -> Option<&StoredRecord>;

    /// Apply every write or none of them
    fn commit(&mut self, writes: BTreeMap<Pubkey, StoredRecord>) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: BTreeMap<Pubkey, StoredRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.records.contains_key(address)
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, address: &Pubkey) -> Option<&StoredRecord> {
        self.records.get(address)
    }

    fn commit(&mut self, writes: BTreeMap<Pubkey, StoredRecord>) -> Result<()> {
        self.records.extend(writes);
        Ok(())
    }
}

/// A unit of work over a [`RecordStore`].
///
/// Writes are staged and only reach the store through [`atomically`].
/// Reads see staged writes first.
pub struct Transaction<'a, S: RecordStore> {
    store: &'a S,
    program_id: Pubkey,
    staged: BTreeMap<Pubkey, StoredRecord>,
}

impl<'a, S: RecordStore> Transaction<'a, S> {
    pub fn new(store: &'a S, program_id: Pubkey) -> Self {
        Self {
            store,
            program_id,
            staged: BTreeMap::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    fn lookup(&self, address: &Pubkey) -> Option<&StoredRecord> {
        self.staged
            .get(address)
            .or_else(|| self.store.get(address))
    }

    pub fn exists(&self, address: &Pubkey) -> bool {
        self.lookup(address).is_some()
    }

    /// Read and deserialize the record at `address`, if any
    pub fn load<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<Option<T>> {
        let Some(record) = self.lookup(address) else {
            return Ok(None);
        };
        require_keys_eq!(record.owner, self.program_id, VotingError::RecordOwnerMismatch);

        T::try_deserialize(&mut record.data.as_slice()).map(Some)
    }

    /// Create a new record at `address`. The buffer is sized once, from the
    /// record's discriminator and `INIT_SPACE`.
    pub fn create<T>(&mut self, address: Pubkey, record: &T) -> Result<()>
    where
        T: AccountSerialize + Discriminator + Space,
    {
        require!(!self.exists(&address), VotingError::RecordAlreadyExists);

        let mut data = vec![0u8; T::DISCRIMINATOR.len() + T::INIT_SPACE];
        write_record(&mut data, record)?;
        self.staged.insert(
            address,
            StoredRecord {
                owner: self.program_id,
                data,
            },
        );
        Ok(())
    }

    /// Overwrite an existing record in place, keeping its size
    pub fn update<T: AccountSerialize>(&mut self, address: Pubkey, record: &T) -> Result<()> {
        let mut stored = self
            .lookup(&address)
            .cloned()
            .ok_or(VotingError::RecordNotFound)?;
        require_keys_eq!(stored.owner, self.program_id, VotingError::RecordOwnerMismatch);

        write_record(&mut stored.data, record)?;
        self.staged.insert(address, stored);
        Ok(())
    }

    pub fn into_writes(self) -> BTreeMap<Pubkey, StoredRecord> {
        self.staged
    }
}

fn write_record<T: AccountSerialize>(data: &mut [u8], record: &T) -> Result<()> {
    data.fill(0);
    let mut writer: &mut [u8] = data;
    record.try_serialize(&mut writer)
}

/// Run `f` as one transaction: commit all staged writes if it succeeds,
/// discard them if it fails.
pub fn atomically<S, T, F>(store: &mut S, program_id: &Pubkey, f: F) -> Result<T>
where
    S: RecordStore,
    F: FnOnce(&mut Transaction<'_, S>) -> Result<T>,
{
    let (output, writes) = {
        let mut tx = Transaction::new(&*store, *program_id);
        let output = f(&mut tx)?;
        (output, tx.into_writes())
    };
    store.commit(writes)?;
    Ok(output)
}
