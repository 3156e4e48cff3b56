use crate::entities;
use crate::errors::DepotError;
use crate::settings::Database as DbCfg;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

/// One inventoried hardware asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: i32,
    pub serial_number: String,
    pub os: String,
    pub vendor: String,
    pub device_name: String,
    pub size: String,
    pub cpu: String,
    pub condit: String,
    pub location: String,
    pub mac_address: String,
}

/// Fields submitted when registering a device. Every field is free text
/// and may be empty; nothing is validated at the storage layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDevice {
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub condit: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mac_address: String,
}

impl From<entities::device::Model> for Device {
    fn from(m: entities::device::Model) -> Self {
        Device {
            id: m.id,
            serial_number: m.serial_number,
            os: m.os,
            vendor: m.vendor,
            device_name: m.device_name,
            size: m.size,
            cpu: m.cpu,
            condit: m.condit,
            location: m.location,
            mac_address: m.mac_address,
        }
    }
}

/// Connect to the configured database and bring the schema up to date.
/// The engine is picked once here, by the connection URL scheme; nothing
/// downstream branches on it.
pub async fn init(cfg: &DbCfg) -> Result<DatabaseConnection, DepotError> {
    let url = cfg
        .connection_url()
        .map_err(|e| DepotError::Other(e.to_string()))?;
    let db = Database::connect(&url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// All devices, newest-first by id.
pub async fn list_devices(db: &DatabaseConnection) -> Result<Vec<Device>, DepotError> {
    use entities::device::{Column, Entity};

    let models = Entity::find().order_by_desc(Column::Id).all(db).await?;
    Ok(models.into_iter().map(Device::from).collect())
}

pub async fn get_device(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<Device>, DepotError> {
    use entities::device::Entity;

    Ok(Entity::find_by_id(id).one(db).await?.map(Device::from))
}

/// Insert a new device; the id is assigned by the database.
pub async fn insert_device(
    db: &DatabaseConnection,
    input: NewDevice,
) -> Result<Device, DepotError> {
    let device = entities::device::ActiveModel {
        id: NotSet,
        serial_number: Set(input.serial_number),
        os: Set(input.os),
        vendor: Set(input.vendor),
        device_name: Set(input.device_name),
        size: Set(input.size),
        cpu: Set(input.cpu),
        condit: Set(input.condit),
        location: Set(input.location),
        mac_address: Set(input.mac_address),
    };

    let model = device.insert(db).await?;
    Ok(Device::from(model))
}

/// Delete by id. A missing row is a distinct `NotFound`, not a crash,
/// so a repeated delete fails the same way as the first.
pub async fn delete_device(db: &DatabaseConnection, id: i32) -> Result<(), DepotError> {
    use entities::device::{Column, Entity};

    let result = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(DepotError::NotFound);
    }
    Ok(())
}
