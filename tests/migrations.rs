#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskeep::db::db::Db;
    use taskeep::db::migrations::get_db_version;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("taskeep.db")
        }
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            MigrationTestContext { temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_v1_creates_tasks_table_and_indexes(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 1);

        let tables: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);

        let indexes: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' \
                 AND name IN ('idx_tasks_date', 'idx_tasks_completed')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(indexes, 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_applies_nothing_new(ctx: &mut MigrationTestContext) {
        {
            let db = Db::open(ctx.db_path()).unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 1);
        }

        let db = Db::open(ctx.db_path()).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 1);

        let applied: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 1);
    }
}
