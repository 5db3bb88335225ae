use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entities::city;
use crate::error::{AppError, AppResult};
use crate::registry::guard;
use crate::utils::validate;

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<city::Model>> {
    Ok(city::Entity::find()
        .order_by_asc(city::Column::Name)
        .all(db)
        .await?)
}

pub async fn create(db: &DatabaseConnection, name: &str) -> AppResult<city::Model> {
    let name = validate::validate_required("name", name)?;

    let txn = db.begin().await?;

    if find_by_name_ignore_case(&txn, &name, None).await?.is_some() {
        return Err(AppError::DuplicateName(format!(
            "City '{}' already exists",
            name
        )));
    }

    let created = city::ActiveModel {
        name: Set(name),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(created)
}

pub async fn update(db: &DatabaseConnection, id: i32, name: &str) -> AppResult<city::Model> {
    let name = validate::validate_required("name", name)?;

    let txn = db.begin().await?;

    let existing = city::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

    // Uniqueness check excludes the row being renamed
    if find_by_name_ignore_case(&txn, &name, Some(id))
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateName(format!(
            "City '{}' already exists",
            name
        )));
    }

    let mut active: city::ActiveModel = existing.into();
    active.name = Set(name);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<i32> {
    let txn = db.begin().await?;

    let dependents = guard::city_dependents(&txn, id).await?;
    if dependents > 0 {
        return Err(AppError::InUse(format!(
            "City is referenced by {} trip schedule(s)",
            dependents
        )));
    }

    let result = city::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("City not found".to_string()));
    }

    txn.commit().await?;
    Ok(id)
}

/// City names are unique ignoring case ("Lagos" and "lagos" are the same
/// city). `exclude` skips the row itself on rename.
async fn find_by_name_ignore_case<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    exclude: Option<i32>,
) -> Result<Option<city::Model>, sea_orm::DbErr> {
    let mut query = city::Entity::find().filter(
        Expr::expr(Func::lower(Expr::col(city::Column::Name))).eq(name.to_lowercase()),
    );

    if let Some(id) = exclude {
        query = query.filter(city::Column::Id.ne(id));
    }

    query.one(conn).await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::*;

    fn lagos() -> city::Model {
        city::Model {
            id: 1,
            name: "Lagos".to_string(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_ignoring_case() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![lagos()]])
            .into_connection();

        let err = create(&db, "lagos").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn create_rejects_blank_name_without_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create(&db, "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn delete_blocks_city_in_use() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(2)]])
            .into_connection();

        let err = delete(&db, 1).await.unwrap_err();
        assert!(matches!(err, AppError::InUse(_)));
    }

    #[tokio::test]
    async fn delete_removes_unreferenced_city() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert_eq!(delete(&db, 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_reports_missing_city() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = delete(&db, 99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rejects_missing_city() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<city::Model>::new()])
            .into_connection();

        let err = update(&db, 42, "Kano").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
