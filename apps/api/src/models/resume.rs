use serde::{Deserialize, Serialize};

/// The single résumé held by the service. Wire names match the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub nome: String,
    pub cargo: String,
    pub endereco: String,
    pub email: String,
    pub telefone: String,
    pub github: String,
    pub linkedin: String,
    pub resumo: String,
    pub experiencia: String,
    pub formacao: String,
    pub habilidades: String,
    /// Photo URL, usually `/uploads/<name>` once a photo has been sent.
    pub foto: String,
}

impl Default for ResumeRecord {
    /// Sample résumé shown on first load.
    fn default() -> Self {
        Self {
            nome: "Rafael Silva".to_string(),
            cargo: "Desenvolvedor Full Stack".to_string(),
            endereco: "Rua Exemplo, 123 - São Paulo/SP".to_string(),
            email: "rafael@email.com".to_string(),
            telefone: "(11) 99999-9999".to_string(),
            github: "https://github.com/rafael".to_string(),
            linkedin: "https://linkedin.com/in/rafaelsilva".to_string(),
            resumo: "Desenvolvedor com 5 anos de experiência em JavaScript, React, Node.js e \
                     bancos de dados relacionais. Especializado em criar aplicações web \
                     escaláveis e de alto desempenho."
                .to_string(),
            experiencia: "Tech Solutions SA\n\
                          Desenvolvedor Full Stack | Jan 2020 - Presente\n\
                          - Desenvolvimento de aplicações web com React e Node.js\n\
                          - Implementação de APIs RESTful\n\
                          \n\
                          InovaTech Ltda\n\
                          Desenvolvedor Frontend | Mar 2018 - Dez 2019\n\
                          - Criação de interfaces responsivas\n\
                          - Otimização de performance"
                .to_string(),
            formacao: "Bacharelado em Ciência da Computação\n\
                       Universidade de São Paulo | 2014 - 2018\n\
                       \n\
                       Técnico em Informática\n\
                       ETEC Centro | 2012 - 2013"
                .to_string(),
            habilidades: "JavaScript, React, Node.js, Express, HTML5, CSS3, SQL, Git".to_string(),
            foto: String::new(),
        }
    }
}

/// Partial update: absent or `null` entries keep the current value.
/// Keys outside the record are rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumePatch {
    pub nome: Option<String>,
    pub cargo: Option<String>,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub resumo: Option<String>,
    pub experiencia: Option<String>,
    pub formacao: Option<String>,
    pub habilidades: Option<String>,
    pub foto: Option<String>,
}

impl ResumePatch {
    pub fn is_empty(&self) -> bool {
        *self == ResumePatch::default()
    }

    /// Names of the fields this patch sets, in record order.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("nome", &self.nome),
            ("cargo", &self.cargo),
            ("endereco", &self.endereco),
            ("email", &self.email),
            ("telefone", &self.telefone),
            ("github", &self.github),
            ("linkedin", &self.linkedin),
            ("resumo", &self.resumo),
            ("experiencia", &self.experiencia),
            ("formacao", &self.formacao),
            ("habilidades", &self.habilidades),
            ("foto", &self.foto),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}

impl ResumeRecord {
    /// Shallow merge: each field present in `patch` overwrites the current one.
    pub fn apply(&mut self, patch: ResumePatch) {
        fn set(slot: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut self.nome, patch.nome);
        set(&mut self.cargo, patch.cargo);
        set(&mut self.endereco, patch.endereco);
        set(&mut self.email, patch.email);
        set(&mut self.telefone, patch.telefone);
        set(&mut self.github, patch.github);
        set(&mut self.linkedin, patch.linkedin);
        set(&mut self.resumo, patch.resumo);
        set(&mut self.experiencia, patch.experiencia);
        set(&mut self.formacao, patch.formacao);
        set(&mut self.habilidades, patch.habilidades);
        set(&mut self.foto, patch.foto);
    }

    /// Returns a copy with `patch` applied, leaving `self` untouched.
    pub fn merged(&self, patch: ResumePatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}
