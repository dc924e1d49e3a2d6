use contracts::domain::a601_stored_report::aggregate::{ReportType, StoredReport, StoredReportId};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a601_stored_report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub report_type: String,
    pub date_generated: String,
    pub csv_data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for StoredReport {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(StoredReport {
            id: StoredReportId::from_string(&m.id).map_err(|e| anyhow::anyhow!(e))?,
            owner_id: m.owner_id,
            name: m.name,
            report_type: ReportType::from_str(&m.report_type).map_err(|e| anyhow::anyhow!(e))?,
            date_generated: m.date_generated,
            csv_data: m.csv_data,
        })
    }
}

pub async fn insert(conn: &DatabaseConnection, report: &StoredReport) -> anyhow::Result<StoredReportId> {
    let active = ActiveModel {
        id: Set(report.id.as_string()),
        owner_id: Set(report.owner_id.clone()),
        name: Set(report.name.clone()),
        report_type: Set(report.report_type.as_str().to_string()),
        date_generated: Set(report.date_generated.clone()),
        csv_data: Set(report.csv_data.clone()),
    };
    active.insert(conn).await?;
    Ok(report.id)
}

/// Отчёты владельца, новые первыми
pub async fn list_by_owner(conn: &DatabaseConnection, owner_id: &str) -> anyhow::Result<Vec<StoredReport>> {
    Entity::find()
        .filter(Column::OwnerId.eq(owner_id))
        .order_by_desc(Column::DateGenerated)
        .all(conn)
        .await?
        .into_iter()
        .map(StoredReport::try_from)
        .collect()
}

pub async fn get_for_owner(
    conn: &DatabaseConnection,
    id: StoredReportId,
    owner_id: &str,
) -> anyhow::Result<Option<StoredReport>> {
    Entity::find_by_id(id.as_string())
        .filter(Column::OwnerId.eq(owner_id))
        .one(conn)
        .await?
        .map(StoredReport::try_from)
        .transpose()
}

pub async fn delete_for_owner(
    conn: &DatabaseConnection,
    id: StoredReportId,
    owner_id: &str,
) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id.as_string()))
        .filter(Column::OwnerId.eq(owner_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
