//! Repository for the `equipment` table.

use sqlx::PgPool;
use upkeep_core::types::DbId;

use crate::models::equipment::{CreateEquipment, Equipment, EquipmentSummary};

/// Column list for `equipment` SELECT queries.
const COLUMNS: &str = "\
    id, name, serial_number, equipment_type, category_id, work_center_id, \
    department, location, assigned_employee, purchase_date, warranty_info, \
    description, maintenance_team_id, default_technician_id, is_scrapped, \
    created_at";

/// SELECT list for the joined summary shape (aliased on `e`).
const SUMMARY_SELECT: &str = "\
    SELECT e.id, e.name, e.serial_number, e.equipment_type, e.department, \
           e.location, e.maintenance_team_id, e.default_technician_id, \
           e.is_scrapped, ec.name AS category_name, wc.name AS work_center_name, \
           m.team_name, t.name AS technician_name, \
           (SELECT COUNT(*) FROM maintenance_requests mr \
             WHERE mr.equipment_id = e.id \
               AND mr.stage NOT IN ('Repaired', 'Scrap')) AS open_requests, \
           e.created_at \
    FROM equipment e \
    LEFT JOIN equipment_categories ec ON e.category_id = ec.id \
    LEFT JOIN work_centers wc ON e.work_center_id = wc.id \
    LEFT JOIN maintenance_teams m ON e.maintenance_team_id = m.id \
    LEFT JOIN technicians t ON e.default_technician_id = t.id";

pub struct EquipmentRepo;

impl EquipmentRepo {
    pub async fn insert(
        pool: &PgPool,
        input: &CreateEquipment,
    ) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment \
                (name, serial_number, equipment_type, category_id, work_center_id, \
                 department, location, assigned_employee, purchase_date, \
                 warranty_info, description, maintenance_team_id, default_technician_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .bind(&input.serial_number)
            .bind(&input.equipment_type)
            .bind(input.category_id)
            .bind(input.work_center_id)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.assigned_employee)
            .bind(input.purchase_date)
            .bind(&input.warranty_info)
            .bind(&input.description)
            .bind(input.maintenance_team_id)
            .bind(input.default_technician_id)
            .fetch_one(pool)
            .await
    }

    /// Find an equipment row by id.
    ///
    /// The returned row's `maintenance_team_id`/`default_technician_id` are
    /// what the assignment resolver copies onto new requests; this is a
    /// fresh read every time (no caching), so concurrent default changes are
    /// last-reader-wins by design.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Joined detail view with lookup names and open-request count.
    pub async fn find_summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EquipmentSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE e.id = $1");
        sqlx::query_as::<_, EquipmentSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List equipment, optionally filtered by a name/serial search term.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<EquipmentSummary>, sqlx::Error> {
        match search {
            Some(term) => {
                let query =
                    format!("{SUMMARY_SELECT} WHERE e.name ILIKE $1 OR e.serial_number ILIKE $1 ORDER BY e.id DESC");
                sqlx::query_as::<_, EquipmentSummary>(&query)
                    .bind(format!("%{term}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{SUMMARY_SELECT} ORDER BY e.id DESC");
                sqlx::query_as::<_, EquipmentSummary>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Delete an equipment row. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
