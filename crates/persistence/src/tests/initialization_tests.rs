// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_person};
use crate::Persistence;

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = create_test_persistence();
    let mut second = create_test_persistence();

    create_test_person(&mut first, "Alpha-1", "John Miller");

    assert_eq!(first.count_personnel().unwrap(), 1);
    assert_eq!(second.count_personnel().unwrap(), 0);
}

#[test]
fn test_fresh_database_is_empty() {
    let mut persistence = create_test_persistence();
    assert_eq!(persistence.count_duties().unwrap(), 0);
    assert_eq!(persistence.count_personnel().unwrap(), 0);
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "duty_roster_init_test_{}.db",
        uuid::Uuid::new_v4()
    ));

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        create_test_person(&mut persistence, "Bravo-1", "Marcus Lee");
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let personnel = reopened.list_personnel(None, None).unwrap();
    assert_eq!(personnel.len(), 1);
    assert_eq!(personnel[0].callsign, "Bravo-1");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}
