//! Almacén de archivos en disco local
//!
//! Guarda los binarios subidos (fotos, recibos, documentos) bajo un
//! directorio por categoría con nombre UUID. La escritura es
//! temp-then-rename: nunca se observa un archivo a medio escribir. Las rutas
//! devueltas son relativas al root y estables.

use crate::utils::errors::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Guarda el contenido bajo la categoría indicada y devuelve la ruta
    /// relativa `categoria/uuid[.ext]`
    pub async fn store(
        &self,
        bytes: &[u8],
        category: &str,
        extension: Option<&str>,
    ) -> Result<String, AppError> {
        validate_category(category)?;

        let dir = self.root.join(category);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Error creating storage directory: {}", e)))?;

        let filename = match extension {
            Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
            _ => Uuid::new_v4().to_string(),
        };

        // Escritura atómica: temporal + rename en el mismo directorio
        let tmp_path = dir.join(format!(".{}.tmp", filename));
        let final_path = dir.join(&filename);

        fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Error writing blob: {}", e)))?;
        fs::rename(&tmp_path, &final_path)
            .await
            .map_err(|e| AppError::Internal(format!("Error finishing blob write: {}", e)))?;

        Ok(format!("{}/{}", category, filename))
    }

    pub async fn exists(&self, path: &str) -> Result<bool, AppError> {
        let absolute = self.resolve(path)?;
        Ok(fs::try_exists(&absolute)
            .await
            .map_err(|e| AppError::Internal(format!("Error checking blob: {}", e)))?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let absolute = self.resolve(path)?;
        match fs::remove_file(&absolute).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("Blob '{}' not found", path)))
            }
            Err(e) => Err(AppError::Internal(format!("Error deleting blob: {}", e))),
        }
    }

    pub async fn read(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let absolute = self.resolve(path)?;
        match fs::read(&absolute).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("Blob '{}' not found", path)))
            }
            Err(e) => Err(AppError::Internal(format!("Error reading blob: {}", e))),
        }
    }

    /// Resuelve una ruta relativa dentro del root, rechazando escapes
    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(path);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));
        if escapes {
            return Err(AppError::BadRequest(format!("Invalid blob path '{}'", path)));
        }
        Ok(self.root.join(relative))
    }
}

fn validate_category(category: &str) -> Result<(), AppError> {
    let valid = !category.is_empty()
        && category
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(AppError::BadRequest(format!(
            "Invalid storage category '{}'",
            category
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> BlobStore {
        BlobStore::new(std::env::temp_dir().join(format!("blobstore-test-{}", Uuid::new_v4())))
    }

    #[tokio::test]
    async fn test_store_and_read_round_trip() {
        let store = temp_store();
        let path = store.store(b"contenido", "penalties", Some("pdf")).await.unwrap();

        assert!(path.starts_with("penalties/"));
        assert!(path.ends_with(".pdf"));
        assert!(store.exists(&path).await.unwrap());
        assert_eq!(store.read(&path).await.unwrap(), b"contenido");
    }

    #[tokio::test]
    async fn test_delete_removes_blob() {
        let store = temp_store();
        let path = store.store(b"x", "vehicles", None).await.unwrap();

        store.delete(&path).await.unwrap();
        assert!(!store.exists(&path).await.unwrap());
        assert!(matches!(store.delete(&path).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let store = temp_store();
        assert!(matches!(
            store.read("../etc/passwd").await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            store.read("/etc/passwd").await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_invalid_category() {
        let store = temp_store();
        assert!(matches!(
            store.store(b"x", "../fuera", None).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            store.store(b"x", "", None).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
