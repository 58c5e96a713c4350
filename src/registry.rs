use crate::error::{Result, ResultsError};
use crate::record::StudentRecord;

/// Maximum number of students held in one session
pub const MAX_STUDENTS: usize = 100;

/// Ordered, append-only collection of student records with unique roll numbers
#[derive(Debug)]
pub struct StudentRegistry {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::with_capacity(MAX_STUDENTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Stores a record. Duplicate rolls and a full registry leave the
    /// collection untouched.
    pub fn insert(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains(record.roll_number()) {
            return Err(ResultsError::duplicate_roll(record.roll_number()));
        }
        if self.is_full() {
            return Err(ResultsError::storage_full(self.capacity));
        }
        self.records.push(record);
        Ok(())
    }

    /// Position of the record with this roll number, in insertion order
    pub fn find_by_roll(&self, roll: i32) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.roll_number() == roll)
    }

    pub fn get(&self, roll: i32) -> Option<&StudentRecord> {
        self.find_by_roll(roll).map(|idx| &self.records[idx])
    }

    pub fn contains(&self, roll: i32) -> bool {
        self.find_by_roll(roll).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(roll: i32) -> StudentRecord {
        StudentRecord::new(roll, format!("Student {roll}"), &[60, 70, 80]).unwrap()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = StudentRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.capacity(), MAX_STUDENTS);
        assert_eq!(registry.find_by_roll(1), None);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = StudentRegistry::new();
        registry.insert(record(5)).unwrap();
        registry.insert(record(3)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_roll(5), Some(0));
        assert_eq!(registry.find_by_roll(3), Some(1));
        assert_eq!(registry.get(3).map(|r| r.name()), Some("Student 3"));
    }

    #[test]
    fn test_duplicate_roll_rejected() {
        let mut registry = StudentRegistry::new();
        registry.insert(record(9)).unwrap();

        let other = StudentRecord::new(9, "Impostor", &[10, 10, 10]).unwrap();
        let err = registry.insert(other).unwrap_err();

        assert!(matches!(err, ResultsError::DuplicateRoll { roll: 9 }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(9).map(|r| r.name()), Some("Student 9"));
    }

    #[test]
    fn test_capacity_enforced() {
        let mut registry = StudentRegistry::with_capacity(2);
        registry.insert(record(1)).unwrap();
        registry.insert(record(2)).unwrap();
        assert!(registry.is_full());

        let err = registry.insert(record(3)).unwrap_err();
        assert!(matches!(err, ResultsError::StorageFull { capacity: 2 }));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut registry = StudentRegistry::new();
        for roll in [30, 10, 20] {
            registry.insert(record(roll)).unwrap();
        }
        let rolls: Vec<i32> = registry.iter().map(|r| r.roll_number()).collect();
        assert_eq!(rolls, vec![30, 10, 20]);
    }
}
