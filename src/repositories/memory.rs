//! Almacenamiento en memoria
//!
//! Implementa los mismos contratos que los repositorios de PostgreSQL,
//! incluidas las restricciones únicas y de integridad referencial del
//! esquema, para tests y ejecuciones sin base de datos.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Moto, NewMoto, NewPatio, NewUsuario, NewVaga, Patio, Usuario, Vaga, VagaStatusCount};
use crate::repositories::{
    MotoRepository, PatioRepository, StoreHealth, UsuarioRepository, VagaRepository,
};
use crate::utils::errors::{messages, AppError, AppResult};

#[derive(Default)]
struct Tables {
    patios: BTreeMap<i64, Patio>,
    vagas: BTreeMap<i64, Vaga>,
    motos: BTreeMap<i64, Moto>,
    usuarios: BTreeMap<i64, Usuario>,
    next_patio_id: i64,
    next_vaga_id: i64,
    next_moto_id: i64,
    next_usuario_id: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

fn page<T: Clone>(rows: &BTreeMap<i64, T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    rows.values().skip(offset).take(limit).cloned().collect()
}

fn is_other(id: i64, exclude_id: Option<i64>) -> bool {
    exclude_id != Some(id)
}

fn bad_request(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

impl Tables {
    fn other_motos(&self, exclude_id: Option<i64>) -> impl Iterator<Item = &Moto> {
        self.motos.values().filter(move |m| is_other(m.id, exclude_id))
    }

    fn check_moto(&self, moto: &NewMoto, exclude_id: Option<i64>) -> AppResult<()> {
        if !self.vagas.contains_key(&moto.vaga_id) {
            return Err(bad_request(messages::VAGA_INEXISTENTE));
        }
        if self.other_motos(exclude_id).any(|m| m.vaga_id == moto.vaga_id) {
            return Err(bad_request(messages::VAGA_OCUPADA));
        }
        if self.other_motos(exclude_id).any(|m| m.placa == moto.placa) {
            return Err(bad_request(messages::PLACA_DUPLICADA));
        }
        if self.other_motos(exclude_id).any(|m| m.chassi == moto.chassi) {
            return Err(bad_request(messages::CHASSI_DUPLICADO));
        }
        Ok(())
    }

    fn check_vaga(&self, vaga: &NewVaga, exclude_id: Option<i64>) -> AppResult<()> {
        if !self.patios.contains_key(&vaga.patio_id) {
            return Err(bad_request(messages::PATIO_INEXISTENTE));
        }
        let duplicated = self
            .vagas
            .values()
            .any(|v| is_other(v.id, exclude_id) && v.numero == vaga.numero && v.patio_id == vaga.patio_id);
        if duplicated {
            return Err(bad_request(messages::NUMERO_VAGA_DUPLICADO));
        }
        Ok(())
    }

    fn check_usuario(&self, usuario: &NewUsuario, exclude_id: Option<i64>) -> AppResult<()> {
        let duplicated = self
            .usuarios
            .values()
            .any(|u| is_other(u.id, exclude_id) && u.email == usuario.email);
        if duplicated {
            return Err(bad_request(messages::EMAIL_DUPLICADO));
        }
        Ok(())
    }
}

/// Base de datos en memoria compartida por todos los repositorios
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MotoRepository for InMemoryStore {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Moto>> {
        Ok(page(&self.tables.read().await.motos, offset, limit))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.motos.len() as i64)
    }

    async fn count_com_problema(&self) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.motos.values().filter(|m| m.tem_problema()).count() as i64)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Moto>> {
        Ok(self.tables.read().await.motos.get(&id).cloned())
    }

    async fn find_by_vaga(&self, vaga_id: i64) -> AppResult<Option<Moto>> {
        let tables = self.tables.read().await;
        Ok(tables.motos.values().find(|m| m.vaga_id == vaga_id).cloned())
    }

    async fn vaga_em_uso(&self, vaga_id: i64, exclude_id: Option<i64>) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .motos
            .values()
            .any(|m| is_other(m.id, exclude_id) && m.vaga_id == vaga_id))
    }

    async fn placa_exists(&self, placa: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .motos
            .values()
            .any(|m| is_other(m.id, exclude_id) && m.placa == placa))
    }

    async fn chassi_exists(&self, chassi: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .motos
            .values()
            .any(|m| is_other(m.id, exclude_id) && m.chassi == chassi))
    }

    async fn create(&self, moto: NewMoto) -> AppResult<Moto> {
        let mut tables = self.tables.write().await;
        tables.check_moto(&moto, None)?;

        let id = next_id(&mut tables.next_moto_id);
        let moto = Moto {
            id,
            modelo: moto.modelo,
            placa: moto.placa,
            chassi: moto.chassi,
            problema_identificado: moto.problema_identificado,
            vaga_id: moto.vaga_id,
        };
        tables.motos.insert(id, moto.clone());
        Ok(moto)
    }

    async fn update(&self, id: i64, moto: NewMoto) -> AppResult<Option<Moto>> {
        let mut tables = self.tables.write().await;
        if !tables.motos.contains_key(&id) {
            return Ok(None);
        }
        tables.check_moto(&moto, Some(id))?;

        let moto = Moto {
            id,
            modelo: moto.modelo,
            placa: moto.placa,
            chassi: moto.chassi,
            problema_identificado: moto.problema_identificado,
            vaga_id: moto.vaga_id,
        };
        tables.motos.insert(id, moto.clone());
        Ok(Some(moto))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.motos.remove(&id).is_some())
    }
}

#[async_trait]
impl VagaRepository for InMemoryStore {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Vaga>> {
        Ok(page(&self.tables.read().await.vagas, offset, limit))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.vagas.len() as i64)
    }

    async fn status_count(&self) -> AppResult<VagaStatusCount> {
        let tables = self.tables.read().await;
        let mut count = VagaStatusCount::default();
        for vaga in tables.vagas.values() {
            count.add(vaga);
        }
        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaga>> {
        Ok(self.tables.read().await.vagas.get(&id).cloned())
    }

    async fn list_by_patio(&self, patio_id: i64) -> AppResult<Vec<Vaga>> {
        let tables = self.tables.read().await;
        let mut vagas: Vec<Vaga> = tables
            .vagas
            .values()
            .filter(|v| v.patio_id == patio_id)
            .cloned()
            .collect();
        vagas.sort_by_key(|v| (v.numero, v.id));
        Ok(vagas)
    }

    async fn numero_exists(&self, numero: i32, patio_id: i64, exclude_id: Option<i64>) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .vagas
            .values()
            .any(|v| is_other(v.id, exclude_id) && v.numero == numero && v.patio_id == patio_id))
    }

    async fn create(&self, vaga: NewVaga) -> AppResult<Vaga> {
        let mut tables = self.tables.write().await;
        tables.check_vaga(&vaga, None)?;

        let id = next_id(&mut tables.next_vaga_id);
        let vaga = Vaga {
            id,
            numero: vaga.numero,
            tipo: vaga.tipo,
            status: vaga.status,
            patio_id: vaga.patio_id,
        };
        tables.vagas.insert(id, vaga.clone());
        Ok(vaga)
    }

    async fn update(&self, id: i64, vaga: NewVaga) -> AppResult<Option<Vaga>> {
        let mut tables = self.tables.write().await;
        if !tables.vagas.contains_key(&id) {
            return Ok(None);
        }
        tables.check_vaga(&vaga, Some(id))?;

        let vaga = Vaga {
            id,
            numero: vaga.numero,
            tipo: vaga.tipo,
            status: vaga.status,
            patio_id: vaga.patio_id,
        };
        tables.vagas.insert(id, vaga.clone());
        Ok(Some(vaga))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.motos.values().any(|m| m.vaga_id == id) {
            return Err(bad_request(messages::VAGA_CON_MOTO));
        }
        Ok(tables.vagas.remove(&id).is_some())
    }
}

#[async_trait]
impl PatioRepository for InMemoryStore {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Patio>> {
        Ok(page(&self.tables.read().await.patios, offset, limit))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.patios.len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patio>> {
        Ok(self.tables.read().await.patios.get(&id).cloned())
    }

    async fn create(&self, patio: NewPatio) -> AppResult<Patio> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_patio_id);
        let patio = Patio { id, nome: patio.nome };
        tables.patios.insert(id, patio.clone());
        Ok(patio)
    }

    async fn update(&self, id: i64, patio: NewPatio) -> AppResult<Option<Patio>> {
        let mut tables = self.tables.write().await;
        Ok(tables.patios.get_mut(&id).map(|existing| {
            existing.nome = patio.nome;
            existing.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.patios.contains_key(&id) {
            return Ok(false);
        }

        let vaga_ids: Vec<i64> = tables
            .vagas
            .values()
            .filter(|v| v.patio_id == id)
            .map(|v| v.id)
            .collect();
        if tables.motos.values().any(|m| vaga_ids.contains(&m.vaga_id)) {
            return Err(bad_request(messages::VAGA_CON_MOTO));
        }

        for vaga_id in vaga_ids {
            tables.vagas.remove(&vaga_id);
        }
        tables.patios.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryStore {
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Usuario>> {
        Ok(page(&self.tables.read().await.usuarios, offset, limit))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.read().await.usuarios.len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        Ok(self.tables.read().await.usuarios.get(&id).cloned())
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .usuarios
            .values()
            .any(|u| is_other(u.id, exclude_id) && u.email == email))
    }

    async fn create(&self, usuario: NewUsuario) -> AppResult<Usuario> {
        let mut tables = self.tables.write().await;
        tables.check_usuario(&usuario, None)?;

        let id = next_id(&mut tables.next_usuario_id);
        let usuario = Usuario {
            id,
            nome: usuario.nome,
            email: usuario.email,
            senha: usuario.senha,
            tipo: usuario.tipo,
        };
        tables.usuarios.insert(id, usuario.clone());
        Ok(usuario)
    }

    async fn update(&self, id: i64, usuario: NewUsuario) -> AppResult<Option<Usuario>> {
        let mut tables = self.tables.write().await;
        if !tables.usuarios.contains_key(&id) {
            return Ok(None);
        }
        tables.check_usuario(&usuario, Some(id))?;

        let usuario = Usuario {
            id,
            nome: usuario.nome,
            email: usuario.email,
            senha: usuario.senha,
            tipo: usuario.tipo,
        };
        tables.usuarios.insert(id, usuario.clone());
        Ok(Some(usuario))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.usuarios.remove(&id).is_some())
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatusVaga, TipoVaga};

    async fn seed_patio_with_vaga(store: &InMemoryStore) -> (Patio, Vaga) {
        let patio = PatioRepository::create(store, NewPatio { nome: "Central".into() })
            .await
            .unwrap();
        let vaga = VagaRepository::create(
            store,
            NewVaga {
                numero: 1,
                tipo: TipoVaga::SemProblema,
                status: StatusVaga::Livre,
                patio_id: patio.id,
            },
        )
        .await
        .unwrap();
        (patio, vaga)
    }

    fn new_moto(placa: &str, chassi: &str, vaga_id: i64) -> NewMoto {
        NewMoto {
            modelo: "Honda CG 160".into(),
            placa: placa.into(),
            chassi: chassi.into(),
            problema_identificado: None,
            vaga_id,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = InMemoryStore::new();
        let a = PatioRepository::create(&store, NewPatio { nome: "A".into() }).await.unwrap();
        let b = PatioRepository::create(&store, NewPatio { nome: "B".into() }).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(PatioRepository::list(&store, 1, 10).await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn test_moto_unique_vaga() {
        let store = InMemoryStore::new();
        let (_, vaga) = seed_patio_with_vaga(&store).await;

        MotoRepository::create(&store, new_moto("AAA1111", "CH1", vaga.id)).await.unwrap();
        let err = MotoRepository::create(&store, new_moto("BBB2222", "CH2", vaga.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == messages::VAGA_OCUPADA));
    }

    #[tokio::test]
    async fn test_moto_update_keeps_own_values() {
        let store = InMemoryStore::new();
        let (_, vaga) = seed_patio_with_vaga(&store).await;

        let moto = MotoRepository::create(&store, new_moto("AAA1111", "CH1", vaga.id)).await.unwrap();
        let updated = MotoRepository::update(&store, moto.id, new_moto("AAA1111", "CH1", vaga.id))
            .await
            .unwrap();
        assert!(updated.is_some());
        assert!(MotoRepository::update(&store, 99, new_moto("X", "Y", vaga.id))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_vaga_delete_restricted_by_moto() {
        let store = InMemoryStore::new();
        let (_, vaga) = seed_patio_with_vaga(&store).await;
        let moto = MotoRepository::create(&store, new_moto("AAA1111", "CH1", vaga.id)).await.unwrap();

        assert!(VagaRepository::delete(&store, vaga.id).await.is_err());
        assert!(MotoRepository::delete(&store, moto.id).await.unwrap());
        assert!(VagaRepository::delete(&store, vaga.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_patio_delete_cascades_vagas() {
        let store = InMemoryStore::new();
        let (patio, vaga) = seed_patio_with_vaga(&store).await;

        assert!(PatioRepository::delete(&store, patio.id).await.unwrap());
        assert!(VagaRepository::find_by_id(&store, vaga.id).await.unwrap().is_none());
        assert!(!PatioRepository::delete(&store, patio.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_vaga_requires_existing_patio() {
        let store = InMemoryStore::new();
        let err = VagaRepository::create(
            &store,
            NewVaga {
                numero: 1,
                tipo: TipoVaga::SemProblema,
                status: StatusVaga::Livre,
                patio_id: 42,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == messages::PATIO_INEXISTENTE));
    }
}
