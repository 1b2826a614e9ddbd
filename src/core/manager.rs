use crate::domain::model::Record;

/// Ordered collection of records, keyed loosely by email.
#[derive(Debug, Clone, Default)]
pub struct UserManager {
    users: Vec<Record>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) {
        tracing::debug!("Adding user {}", record.email());
        self.users.push(record);
    }

    /// Removes every record with this email and returns how many were dropped.
    pub fn remove(&mut self, email: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|user| user.email() != email);
        let removed = before - self.users.len();
        tracing::debug!("Removed {} user(s) with email {}", removed, email);
        removed
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Record> {
        self.users.iter().find(|user| user.email() == email)
    }

    pub fn list_all(&self) -> Vec<String> {
        self.users.iter().map(Record::details).collect()
    }

    pub fn first(&self) -> Option<&Record> {
        self.users.first()
    }

    pub fn records(&self) -> &[Record] {
        &self.users
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Extend<Record> for UserManager {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, age: u32) -> Record {
        Record::new(name, age, format!("{}@example.com", name.to_lowercase()))
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut manager = UserManager::new();
        manager.add(user("Bob", 30));
        manager.add(user("Alice", 25));
        manager.add(user("Carol", 41));

        assert_eq!(
            manager.list_all(),
            vec![
                "Name: Bob, Age: 30, Email: bob@example.com",
                "Name: Alice, Age: 25, Email: alice@example.com",
                "Name: Carol, Age: 41, Email: carol@example.com",
            ]
        );
    }

    #[test]
    fn test_find_by_email_returns_first_match() {
        let mut manager = UserManager::new();
        manager.add(Record::new("First", 20, "dup@example.com"));
        manager.add(Record::new("Second", 21, "dup@example.com"));

        let found = manager.find_by_email("dup@example.com").unwrap();
        assert_eq!(found.name(), "First");
        assert!(manager.find_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut manager = UserManager::new();
        manager.add(Record::new("First", 20, "dup@example.com"));
        manager.add(user("Keep", 33));
        manager.add(Record::new("Second", 21, "dup@example.com"));

        assert_eq!(manager.remove("dup@example.com"), 2);
        assert_eq!(manager.len(), 1);
        assert!(manager.find_by_email("dup@example.com").is_none());
        assert_eq!(manager.first().unwrap().name(), "Keep");
    }

    #[test]
    fn test_remove_absent_email_is_noop() {
        let mut manager = UserManager::new();
        manager.extend([user("Bob", 30), user("Alice", 25)]);
        let before = manager.records().to_vec();

        assert_eq!(manager.remove("ghost@example.com"), 0);
        assert_eq!(manager.records(), before.as_slice());
    }

    #[test]
    fn test_empty_manager() {
        let manager = UserManager::new();
        assert!(manager.is_empty());
        assert!(manager.first().is_none());
        assert!(manager.list_all().is_empty());
    }
}
