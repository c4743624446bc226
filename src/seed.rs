//! Initial vocabulary, groups and study activities. Inserted once, in one transaction, and
//! only into an empty `words` table so restarts never duplicate rows.

use crate::error::AppError;
use sqlx::SqlitePool;

/// (german, english, class). Ids are assigned 1..=30 in this order on an empty table.
pub const WORDS: &[(&str, &str, &str)] = &[
    ("das Haus", "House", "noun"),
    ("der Hund", "Dog", "noun"),
    ("die Katze", "Cat", "noun"),
    ("das Buch", "Book", "noun"),
    ("der Stuhl", "Chair", "noun"),
    ("der Tisch", "Table", "noun"),
    ("das Auto", "Car", "noun"),
    ("der Baum", "Tree", "noun"),
    ("die Blume", "Flower", "noun"),
    ("der Apfel", "Apple", "noun"),
    ("die Schule", "School", "noun"),
    ("der Lehrer", "Teacher", "noun"),
    ("die Schülerin", "Student (female)", "noun"),
    ("der Schüler", "Student (male)", "noun"),
    ("das Fenster", "Window", "noun"),
    ("die Tür", "Door", "noun"),
    ("der Computer", "Computer", "noun"),
    ("das Telefon", "Phone", "noun"),
    ("die Uhr", "Clock", "noun"),
    ("der Tisch", "Desk", "noun"),
    ("das Papier", "Paper", "noun"),
    ("der Stift", "Pen", "noun"),
    ("das Heft", "Notebook", "noun"),
    ("das Bild", "Picture", "noun"),
    ("die Lampe", "Lamp", "noun"),
    ("der Teppich", "Carpet", "noun"),
    ("die Wand", "Wall", "noun"),
    ("das Dach", "Roof", "noun"),
    ("der Garten", "Garden", "noun"),
    ("die Straße", "Street", "noun"),
];

/// (name, description)
pub const GROUPS: &[(&str, &str)] = &[
    ("Basic Nouns", "Basic nouns for beginners"),
    ("Household Items", "Items found in a house"),
    ("Animals", "Common animals"),
];

/// (word_id, group_id)
pub const WORD_GROUPS: &[(i64, i64)] = &[
    (1, 1), (2, 3), (3, 3), (4, 1), (5, 2),
    (6, 2), (7, 1), (8, 1), (9, 1), (10, 1),
    (11, 1), (12, 1), (13, 1), (14, 1), (15, 2),
    (16, 2), (17, 2), (18, 2), (19, 2), (20, 2),
    (21, 2), (22, 2), (23, 2), (24, 2), (25, 2),
    (26, 2), (27, 2), (28, 2), (29, 2), (30, 2),
];

/// (name, url)
pub const STUDY_ACTIVITIES: &[(&str, &str)] = &[
    ("Flashcards", "https://picsum.photos/seed/picsum/600/300"),
    ("Quizzes", "https://picsum.photos/seed/picsum/600/300"),
    ("Listening Practice", "https://picsum.photos/seed/picsum/600/300"),
];

/// Number of seeded associations for a group.
pub fn seeded_group_size(group_id: i64) -> usize {
    WORD_GROUPS.iter().filter(|(_, g)| *g == group_id).count()
}

/// Insert the seed rows when `words` is empty. Returns whether anything was inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, AppError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!(words = existing, "store already populated, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    for (german, english, class) in WORDS {
        sqlx::query("INSERT INTO words (german, english, class) VALUES (?, ?, ?)")
            .bind(german)
            .bind(english)
            .bind(class)
            .execute(&mut *tx)
            .await?;
    }
    for (name, description) in GROUPS {
        sqlx::query("INSERT INTO groups (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }
    for (word_id, group_id) in WORD_GROUPS {
        sqlx::query("INSERT INTO word_groups (word_id, group_id) VALUES (?, ?)")
            .bind(word_id)
            .bind(group_id)
            .execute(&mut *tx)
            .await?;
    }
    for (name, url) in STUDY_ACTIVITIES {
        sqlx::query("INSERT INTO study_activities (name, url) VALUES (?, ?)")
            .bind(name)
            .bind(url)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(
        words = WORDS.len(),
        groups = GROUPS.len(),
        word_groups = WORD_GROUPS.len(),
        study_activities = STUDY_ACTIVITIES.len(),
        "seeded store"
    );
    Ok(true)
}
