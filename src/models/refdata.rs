use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: u32,
    pub name: String,
    pub grade_level: String,
}

// Static, read-only reference lists. Nothing in the application creates or
// edits these; activities copy display fields out of them at save time.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub subjects: Vec<Subject>,
    pub teachers: Vec<Teacher>,
    pub classes: Vec<SchoolClass>,
    pub rooms: Vec<String>,
}

impl ReferenceData {
    pub fn subject(&self, id: u32) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn teacher(&self, id: u32) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn class(&self, id: u32) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.id == id)
    }
}

fn subject(id: u32, name: &str, code: &str) -> Subject {
    Subject {
        id,
        name: name.to_string(),
        code: code.to_string(),
    }
}

fn teacher(id: u32, name: &str) -> Teacher {
    Teacher {
        id,
        name: name.to_string(),
    }
}

fn school_class(id: u32, name: &str, grade_level: &str) -> SchoolClass {
    SchoolClass {
        id,
        name: name.to_string(),
        grade_level: grade_level.to_string(),
    }
}

pub fn seed_reference_data() -> ReferenceData {
    ReferenceData {
        subjects: vec![
            subject(1, "Matemática", "MAT101"),
            subject(2, "História", "HIS102"),
            subject(3, "Química", "QUI103"),
            subject(4, "Física", "FIS104"),
        ],
        teachers: vec![
            teacher(1, "Prof. Silva"),
            teacher(2, "Prof. Santos"),
            teacher(3, "Prof. Costa"),
        ],
        classes: vec![
            school_class(1, "3º A", "3º ano"),
            school_class(2, "2º B", "2º ano"),
            school_class(3, "1º C", "1º ano"),
        ],
        rooms: vec![
            "A101".to_string(),
            "A102".to_string(),
            "B203".to_string(),
            "B204".to_string(),
            "Lab01".to_string(),
            "Lab02".to_string(),
            "Auditório".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lists_match_expected_sizes() {
        let refs = seed_reference_data();
        assert_eq!(refs.subjects.len(), 4);
        assert_eq!(refs.teachers.len(), 3);
        assert_eq!(refs.classes.len(), 3);
        assert_eq!(refs.rooms.len(), 7);
    }

    #[test]
    fn lookup_by_id_finds_known_and_rejects_unknown() {
        let refs = seed_reference_data();
        assert_eq!(refs.subject(3).map(|s| s.code.as_str()), Some("QUI103"));
        assert_eq!(refs.teacher(2).map(|t| t.name.as_str()), Some("Prof. Santos"));
        assert_eq!(refs.class(1).map(|c| c.grade_level.as_str()), Some("3º ano"));
        assert!(refs.subject(99).is_none());
    }
}
