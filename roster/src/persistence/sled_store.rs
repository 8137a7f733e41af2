use crate::domain::{Employee, EmployeeDraft};
use crate::ports::{EmployeeStore, StoreError};
use async_trait::async_trait;
use shared::EmployeeId;
use std::path::Path;

const EMPLOYEES_TREE: &str = "employees";

/// Sled-backed record store. Rows live in a single tree keyed by the
/// big-endian id, so iteration yields employees in id order.
#[derive(Clone)]
pub struct SledEmployeeStore {
    db: sled::Db,
}

impl SledEmployeeStore {
    /// Open (or create) the store under `path`, creating the parent
    /// directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn tree(&self) -> Result<sled::Tree, StoreError> {
        Ok(self.db.open_tree(EMPLOYEES_TREE)?)
    }

    fn next_id(tree: &sled::Tree) -> Result<EmployeeId, StoreError> {
        match tree.last()? {
            // A row at u64::MAX leaves no id to assign; refuse rather
            // than wrap around onto id 0.
            Some((key, _)) => decode_id(&key)
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted),
            None => Ok(1),
        }
    }
}

fn encode_id(id: EmployeeId) -> [u8; 8] {
    id.to_be_bytes()
}

fn decode_id(bytes: &[u8]) -> EmployeeId {
    // All keys in the employees tree are written by encode_id.
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    EmployeeId::from_be_bytes(buf)
}

#[async_trait]
impl EmployeeStore for SledEmployeeStore {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        let tree = self.tree()?;
        match tree.get(encode_id(id))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let tree = self.tree()?;
        let mut employees = Vec::new();

        for item in tree.iter() {
            let (_, bytes) = item?;
            employees.push(serde_json::from_slice(&bytes)?);
        }

        Ok(employees)
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let tree = self.tree()?;

        let id = match draft.id {
            Some(id) => id,
            None => Self::next_id(&tree)?,
        };
        let employee = draft.into_employee(id);

        tree.insert(encode_id(id), serde_json::to_vec(&employee)?)?;
        tree.flush()?;

        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, StoreError> {
        let tree = self.tree()?;

        tree.insert(encode_id(employee.id), serde_json::to_vec(&employee)?)?;
        tree.flush()?;

        Ok(employee)
    }

    async fn remove(&self, id: EmployeeId) -> Result<bool, StoreError> {
        let tree = self.tree()?;

        let existed = tree.remove(encode_id(id))?.is_some();
        tree.flush()?;

        Ok(existed)
    }
}
