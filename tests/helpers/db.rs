use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

/// Test database with automatic cleanup
pub struct TestDb {
    connection: DatabaseConnection,
    _temp_file: NamedTempFile,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        // Create temporary SQLite database file
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_str().expect("Invalid temp file path");
        let db_url = format!("sqlite://{}?mode=rwc", db_path);

        // Connect to database
        let connection = Database::connect(&db_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        migration::Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations");

        Self {
            connection,
            _temp_file: temp_file,
        }
    }

    /// Get database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

/// Seed one device for tests that need existing rows
pub async fn seed_device(db: &DatabaseConnection, serial: &str) -> depot::storage::Device {
    depot::storage::insert_device(
        db,
        depot::storage::NewDevice {
            serial_number: serial.to_string(),
            os: "Windows 11".to_string(),
            vendor: "Dell".to_string(),
            device_name: "Latitude".to_string(),
            size: "14\"".to_string(),
            cpu: "i5".to_string(),
            condit: "Good".to_string(),
            location: "Lab 2".to_string(),
            mac_address: "00:1B:44:11:3A:B7".to_string(),
        },
    )
    .await
    .expect("Failed to seed device")
}
