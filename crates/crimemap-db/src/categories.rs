//! Category taxonomy repository implementation.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crimemap_core::{Category, CategoryRepository, Error, Result, Subcategory};

/// Fixed three-way taxonomy join; takes no parameters.
const CATEGORY_TREE_SQL: &str = "\
SELECT c.id AS category_id,
       c.name AS category_name,
       sc.id AS subcategory_id,
       sc.name AS subcategory_name,
       sc.display_name
  FROM categories c
  JOIN category_subcategories cs ON c.id = cs.category_id
  JOIN subcategories sc ON cs.subcategory_id = sc.id";

/// One flat row of the taxonomy join.
#[derive(Debug, Clone, sqlx::FromRow)]
struct CategoryRow {
    category_id: i32,
    category_name: String,
    subcategory_id: i32,
    subcategory_name: String,
    display_name: String,
}

/// Fold flat join rows into the nested category tree.
///
/// A category entry is created on first sight and keeps that position in
/// the output, so the tree order is deterministic for a given row order.
/// Each row appends exactly one subcategory; the join's uniqueness is
/// trusted, there is no defensive deduplication.
fn fold_rows(rows: Vec<CategoryRow>) -> Vec<Category> {
    let mut tree: Vec<Category> = Vec::new();
    let mut index_by_id: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let idx = *index_by_id.entry(row.category_id).or_insert_with(|| {
            tree.push(Category {
                id: row.category_id,
                name: row.category_name.clone(),
                subcategories: Vec::new(),
            });
            tree.len() - 1
        });

        tree[idx].subcategories.push(Subcategory {
            id: row.subcategory_id,
            name: row.subcategory_name,
            display_name: row.display_name,
        });
    }

    tree
}

/// PostgreSQL implementation of [`CategoryRepository`].
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn fetch_tree(&self) -> Result<Vec<Category>> {
        let start = Instant::now();

        // Unlike the crime query, a single bad row here is fatal: the
        // taxonomy is small and reference data, so a decode failure means
        // the dataset itself is broken.
        let rows: Vec<CategoryRow> = sqlx::query_as(CATEGORY_TREE_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        let tree = fold_rows(rows);

        debug!(
            subsystem = "db",
            component = "categories",
            op = "fetch_tree",
            result_count = tree.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Category tree assembled"
        );

        Ok(tree)
    }
}
