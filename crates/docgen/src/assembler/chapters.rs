//! Document content, one function per part in reading order

use super::builders::{
    body, bullet_run, bullets, code, h1, h2, h3, label, lead, numbered, numbered_step, spaced,
    DataTable, HeaderTheme, AFTER_BODY, AFTER_LABEL,
};
use super::theme::{ACCENT_BLUE, MUTED_GRAY};
use doc_model::{
    Alignment, CharacterProperties, ContentBlock, Paragraph, ParagraphProperties, TableOfContents,
    TextRun,
};

pub fn cover() -> Vec<ContentBlock> {
    let centered = |before: Option<f32>, after: f32, text: &str, run: CharacterProperties| {
        ContentBlock::Paragraph(Paragraph::styled_text(text, run).with_formatting(
            ParagraphProperties::new()
                .aligned(Alignment::Center)
                .spacing(before, Some(after)),
        ))
    };

    vec![
        ContentBlock::title(Paragraph::text("Data Warehouse Credits Brasil")),
        centered(
            Some(6.0),
            24.0,
            "Documentação Técnica Completa",
            CharacterProperties::new().size(14.0).bold().color(ACCENT_BLUE),
        ),
        centered(
            None,
            6.0,
            "Arquitetura Medallion: Bronze → Silver → Gold",
            CharacterProperties::new().size(12.0).italic(),
        ),
        centered(None, 6.0, "PostgreSQL 15 com Docker", CharacterProperties::new().size(11.0)),
        centered(
            None,
            12.0,
            "Versão 1.0 | Outubro 2025",
            CharacterProperties::new().size(11.0).color(MUTED_GRAY),
        ),
        ContentBlock::PageBreak,
    ]
}

pub fn contents() -> Vec<ContentBlock> {
    vec![
        ContentBlock::TableOfContents(TableOfContents::new("Sumário").with_heading_range(1, 3)),
        ContentBlock::PageBreak,
    ]
}

/// 1. Visão Geral do Projeto
pub fn overview() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h1("1. Visão Geral do Projeto"),
        spaced(
            AFTER_BODY,
            vec![
                TextRun::new("O "),
                TextRun::bold("Data Warehouse Credits Brasil"),
                TextRun::new(" é uma solução de consolidação de dados que integra múltiplas fontes (sistemas internos e parceiros) utilizando a arquitetura Medallion em três camadas: Bronze, Silver e Gold. O objetivo principal é fornecer uma visão unificada e estratégica dos dados para tomada de decisões nas áreas de Vendas, Financeiro, Atendimento e Gestão."),
            ],
        ),
        h2("1.1 Objetivos Principais"),
    ];

    blocks.extend(bullets(&[
        "Consolidar dados de 9+ fontes diferentes em um único repositório",
        "Fornecer visão 360° do cliente integrando dados de CRM, ERP e parceiros",
        "Automatizar processos de ETL com Python e agendamento",
        "Garantir qualidade, rastreabilidade e auditoria dos dados",
        "Entregar views analíticas prontas para consumo em Power BI",
    ]));

    blocks.push(h2("1.2 Fontes de Dados"));
    blocks.push(
        DataTable::new(
            &[140.0, 140.0, 188.0],
            HeaderTheme::inverted("1F4E78"),
            &["Fonte", "Tipo", "Dados Fornecidos"],
        )
        .row(&["OneDrive", "CSV", "Clientes, Contratos, Produtos, Precificação"])
        .row(&["Ploomes CRM", "API REST/JSON", "Deals, Contacts, Organizations"])
        .row(&["Omie ERP", "API REST/JSON", "Notas Fiscais, Contas a Pagar/Receber"])
        .row(&["Movidesk", "API REST/JSON", "Tickets de Atendimento, SLA"])
        .row(&["Finqi", "API REST/JSON", "Consumo de Serviços, Transações"])
        .row(&["Salesbox", "API REST/JSON", "Consumo de Produtos, Uso"])
        .row(&["Acertpix", "API REST/JSON", "Transações PIX"])
        .row(&["SPC Brasil", "API REST/JSON", "Consultas de Crédito, Score"])
        .build(),
    );
    blocks.push(ContentBlock::PageBreak);
    blocks
}

/// 2. Arquitetura Medallion, one section per layer
pub fn medallion() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h1("2. Arquitetura Medallion"),
        body("A arquitetura Medallion organiza os dados em três camadas progressivas, cada uma com responsabilidades específicas. Este modelo garante rastreabilidade, qualidade e performance otimizada para análises."),
    ];
    blocks.extend(bronze_layer());
    blocks.push(ContentBlock::PageBreak);
    blocks.extend(silver_layer());
    blocks.push(ContentBlock::PageBreak);
    blocks.extend(gold_layer());
    blocks.push(ContentBlock::PageBreak);
    blocks
}

fn bronze_layer() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h2("2.1 Camada Bronze (Raw Layer)"),
        lead(
            "Objetivo: ",
            "Armazenar dados brutos exatamente como vieram das fontes, sem qualquer transformação.",
        ),
        label("Características:", AFTER_BODY),
    ];

    blocks.extend(bullets(&[
        "Todos os campos armazenados como VARCHAR ou TEXT",
        "Payloads JSON completos salvos em campo JSONB para auditoria",
        "Metadados obrigatórios: data_carga_bronze, nome_arquivo_origem",
        "Nenhuma validação ou limpeza aplicada",
        "Schema: bronze.*",
    ]));
    blocks.push(bullet_run(TextRun::bold("Total: 16 tabelas")));

    blocks.push(h3("2.1.1 Tabelas da Camada Bronze"));
    blocks.push(
        DataTable::new(&[234.0, 234.0], HeaderTheme::inverted("CD7F32"), &["Tabela", "Fonte"])
            .row(&["bronze.onedrive_clientes", "OneDrive/Clientes.csv"])
            .row(&["bronze.onedrive_contratos", "OneDrive/Contratos.csv"])
            .row(&["bronze.onedrive_produtos", "OneDrive/Produtos.csv"])
            .row(&["bronze.onedrive_precificacao", "OneDrive/Precificacao.csv"])
            .row(&["bronze.ploomes_deals", "API Ploomes /Deals"])
            .row(&["bronze.ploomes_contacts", "API Ploomes /Contacts"])
            .row(&["bronze.ploomes_organizations", "API Ploomes /Organizations"])
            .row(&["bronze.omie_notas_fiscais", "API Omie /NotasFiscais"])
            .row(&["bronze.omie_contas_receber", "API Omie /ContasReceber"])
            .row(&["bronze.omie_contas_pagar", "API Omie /ContasPagar"])
            .row(&["bronze.movidesk_tickets", "API Movidesk /Tickets"])
            .row(&["bronze.finqi_consumo", "API Finqi /Consumo"])
            .row(&["bronze.salesbox_consumo", "API Salesbox /Uso"])
            .row(&["bronze.acertpix_transacoes", "API Acertpix /Transacoes"])
            .row(&["bronze.spc_consultas", "API SPC Brasil /Consultas"])
            .build(),
    );
    blocks
}

fn silver_layer() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h2("2.2 Camada Silver (Curated Layer)"),
        lead(
            "Objetivo: ",
            "Transformar dados brutos em dados limpos, validados e prontos para análise.",
        ),
        label("Transformações Aplicadas:", AFTER_BODY),
    ];

    blocks.extend(bullets(&[
        "Conversão de tipos de dados (VARCHAR → DATE, NUMERIC, BOOLEAN)",
        "Validação de CPF/CNPJ, emails, telefones",
        "Deduplicação usando ROW_NUMBER() OVER (PARTITION BY)",
        "Padronização de categorias, status e nomenclaturas",
        "Criação de chaves primárias (PKs) e estrangeiras (FKs)",
        "Merge de dados de múltiplas fontes (ex: clientes do OneDrive + Ploomes)",
        "Tratamento de valores nulos e outliers",
        "Schema: credits.*",
    ]));
    blocks.push(bullet_run(TextRun::bold("Total: 5 tabelas principais")));

    blocks.push(h3("2.2.1 Tabelas da Camada Silver"));
    blocks.push(
        DataTable::new(&[156.0, 312.0], HeaderTheme::light("C0C0C0"), &["Tabela", "Descrição"])
            .bold_first_column()
            .row(&["credits.clientes", "Tabela central de clientes com merge de OneDrive + Ploomes. Dados validados (CPF/CNPJ, email) e deduplicados."])
            .row(&["credits.contratos", "Contratos com datas convertidas (DATE) e valores numéricos (NUMERIC). FK para credits.clientes."])
            .row(&["credits.produtos", "Catálogo de produtos com categorização e status padronizados."])
            .row(&["credits.notas_fiscais", "Notas fiscais do Omie com valores consolidados e FK para clientes."])
            .row(&["credits.consumo_parceiros", "União de consumo de Finqi, Salesbox, Acertpix. Campo 'parceiro' identifica a fonte."])
            .build(),
    );

    blocks.push(h3("2.2.2 Relacionamentos Entre Tabelas"));
    blocks.push(spaced(
        AFTER_LABEL,
        vec![TextRun::new("A camada Silver estabelece relacionamentos através de chaves primárias e estrangeiras:")],
    ));
    blocks.extend(bullets(&[
        "credits.clientes (cliente_pk) ← credits.contratos (cliente_pk)",
        "credits.clientes (cliente_pk) ← credits.notas_fiscais (cliente_pk)",
        "credits.clientes (cliente_pk) ← credits.consumo_parceiros (cliente_pk)",
    ]));
    blocks
}

fn gold_layer() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h2("2.3 Camada Gold (Analytics Layer)"),
        lead(
            "Objetivo: ",
            "Fornecer views e tabelas agregadas otimizadas para consumo direto em ferramentas de BI.",
        ),
        label("Características:", AFTER_BODY),
    ];

    blocks.extend(bullets(&[
        "Views materializadas ou convencionais conforme necessidade",
        "Agregações pré-calculadas (SUM, AVG, COUNT)",
        "Métricas de negócio (KPIs, faturamento, pipeline)",
        "Joins complexos simplificados",
        "Atualização periódica conforme frequência de uso",
        "Schema: credits.vw_*",
    ]));

    blocks.push(h3("2.3.1 Views da Camada Gold"));
    blocks.push(
        DataTable::new(&[156.0, 312.0], HeaderTheme::light("FFD700"), &["View", "Descrição e Métricas"])
            .bold_first_column()
            .row(&["vw_faturamento_mensal", "Receita consolidada por mês/cliente/produto. Métricas: faturamento total, ticket médio, quantidade de notas."])
            .row(&["vw_consumo_mensal_parceiros", "Consolidação de consumo de serviços por parceiro (Finqi, Salesbox, etc). Métricas: quantidade consumida, valor total."])
            .row(&["vw_pipeline_vendas", "Funil de vendas do Ploomes. Métricas: quantidade de deals por estágio, valor total, probabilidade média de ganho."])
            .row(&["vw_performance_atendimento", "Análise de tickets Movidesk. Métricas: total de tickets, tickets fechados, tempo médio de resolução, satisfação."])
            .row(&["vw_consumo_6_meses", "Histórico de consumo dos últimos 6 meses para análise de tendências."])
            .row(&["vw_metas_consultores", "Acompanhamento de metas por consultor de vendas."])
            .build(),
    );
    blocks
}

/// 3. Fluxo de Dados e Integração
pub fn data_flow() -> Vec<ContentBlock> {
    vec![
        h1("3. Fluxo de Dados e Integração"),
        body("O fluxo de dados segue o modelo ETL (Extract, Transform, Load) através das três camadas:"),
        h2("3.1 Ingestão Bronze (Extract)"),
        numbered_step("Extração: ", "Scripts Python conectam às APIs ou leem CSVs do OneDrive"),
        numbered_step("Carga Raw: ", "Dados inseridos nas tabelas bronze.* exatamente como recebidos"),
        numbered_step("Auditoria: ", "Registro de data_carga_bronze e nome_arquivo_origem"),
        numbered_step("Frequência: ", "Varia por fonte (1h para Movidesk, diária para OneDrive, etc.)"),
        h2("3.2 Transformação Silver (Transform)"),
        numbered_step("Limpeza: ", "Remoção de duplicatas, tratamento de nulos"),
        numbered_step("Validação: ", "Aplicação de regras de negócio e validações"),
        numbered_step("Conversão: ", "Tipos de dados corretos (DATE, NUMERIC, BOOLEAN)"),
        numbered_step("Merge: ", "Consolidação de múltiplas fontes (ex: clientes)"),
        numbered_step("Carga Silver: ", "INSERT/UPDATE nas tabelas credits.* com controle de versão"),
        h2("3.3 Agregação Gold (Load)"),
        numbered_step("Agregação: ", "Criação de views com GROUP BY, JOINs complexos"),
        numbered_step("Cálculos: ", "KPIs, métricas de negócio pré-calculadas"),
        numbered_step("Otimização: ", "Índices, views materializadas conforme necessidade"),
        numbered_step("Atualização: ", "REFRESH periódico ou sob demanda"),
        ContentBlock::PageBreak,
    ]
}

const REPOSITORY_TREE: &[&str] = &[
    "dw-credits-brasil/",
    "│",
    "├── sql/",
    "│   ├── bronze/              # Scripts DDL camada Bronze",
    "│   ├── silver/              # Scripts DDL camada Silver",
    "│   ├── gold/                # Views camada Gold",
    "│   └── init/                # Scripts de inicialização",
    "│",
    "├── python/",
    "│   ├── ingestors/           # Scripts de ingestão por fonte",
    "│   ├── transformers/        # Transformações Bronze → Silver",
    "│   ├── utils/               # Funções utilitárias",
    "│   └── schedulers/          # Orquestração e agendamento",
    "│",
    "├── docker/",
    "│   ├── docker-compose.yml   # Configuração Docker completa",
    "│   └── Dockerfile            # Imagem customizada se necessário",
    "│",
    "├── config/",
    "│   ├── dev.env              # Variáveis ambiente dev",
    "│   ├── prod.env             # Variáveis ambiente prod",
    "│   └── connections.yaml     # Configurações de conexão",
    "│",
    "├── docs/",
    "│   ├── api/                 # Documentação de APIs",
    "│   ├── diagrams/            # Diagramas de arquitetura",
    "│   └── runbooks/            # Guias operacionais",
    "│",
    "├── tests/                   # Testes unitários e integração",
    "├── .gitignore",
    "├── README.md",
    "└── requirements.txt         # Dependências Python",
];

/// 4. Estrutura do Repositório GitHub
pub fn repository() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h1("4. Estrutura do Repositório GitHub"),
        body("O repositório está organizado para facilitar manutenção, deployment e escalabilidade:"),
    ];
    blocks.extend(code(REPOSITORY_TREE));
    blocks.push(ContentBlock::PageBreak);
    blocks
}

const SETUP_COMMANDS: &[&str] = &[
    "# 1. Clonar repositório",
    "git clone https://github.com/credits-brasil/dw-credits-brasil.git",
    "cd dw-credits-brasil",
    "",
    "# 2. Configurar variáveis de ambiente",
    "cp config/dev.env.example config/dev.env",
    "# Editar dev.env com suas credenciais",
    "",
    "# 3. Subir containers Docker",
    "cd docker",
    "docker-compose up -d",
    "",
    "# 4. Executar scripts de inicialização",
    "psql -U dw_admin -d credits_dw -f sql/init/01-create-schemas.sql",
    "psql -U dw_admin -d credits_dw -f sql/bronze/create-all-tables.sql",
    "psql -U dw_admin -d credits_dw -f sql/silver/create-all-tables.sql",
    "",
    "# 5. Instalar dependências Python",
    "python -m venv venv",
    "source venv/bin/activate",
    "pip install -r requirements.txt",
];

/// 5. Instalação e Deployment
pub fn deployment() -> Vec<ContentBlock> {
    let mut blocks = vec![
        h1("5. Instalação e Deployment"),
        h2("5.1 Ambiente Local (Desenvolvimento)"),
        label("Pré-requisitos:", AFTER_LABEL),
    ];
    blocks.extend(bullets(&["Docker 20+ e Docker Compose", "Python 3.10+", "Git"]));

    blocks.push(h3("Passo a Passo"));
    blocks.extend(code(SETUP_COMMANDS));

    blocks.push(h2("5.2 Deploy Azure (Produção)"));
    blocks.push(body("Após aprovação do orçamento, o deployment será realizado na Azure com a seguinte arquitetura:"));
    blocks.extend(bullets(&[
        "VM Azure D8s_v5 (8 vCPUs, 32 GB RAM)",
        "Disco Premium SSD 1TB",
        "PostgreSQL 15 em Docker",
        "Backup diário automatizado",
        "Monitoramento com Azure Monitor",
    ]));
    blocks.push(ContentBlock::PageBreak);
    blocks
}

/// 6. Automação e Orquestração
pub fn automation() -> Vec<ContentBlock> {
    vec![
        h1("6. Automação e Orquestração"),
        body("Os processos ETL são automatizados usando Python com agendamento via cron ou Apache Airflow."),
        h2("6.1 Frequência de Atualização"),
        DataTable::new(
            &[156.0, 156.0, 156.0],
            HeaderTheme::inverted("4472C4"),
            &["Fonte", "Frequência", "Horário"],
        )
        .row(&["Movidesk", "A cada 1 hora", "7h às 19h"])
        .row(&["Omie NF", "A cada 2 horas", "6h, 8h, 10h..."])
        .row(&["Ploomes", "A cada 4 horas", "6h, 10h, 14h, 18h"])
        .row(&["OneDrive", "Diária", "6h"])
        .row(&["Finqi/Salesbox", "Diária", "7h"])
        .build(),
        ContentBlock::PageBreak,
    ]
}

/// 7. Próximos Passos, one numbered list per phase
pub fn next_steps() -> Vec<ContentBlock> {
    let phases: [(&str, &[&str]); 3] = [
        (
            "7.1 Fase 1: Desenvolvimento Local (Atual)",
            &[
                "Criar todas as tabelas Bronze, Silver e Gold",
                "Desenvolver scripts Python de ingestão",
                "Implementar transformações Bronze → Silver",
                "Criar views Gold para BI",
                "Testar localmente com dados de amostra",
            ],
        ),
        (
            "7.2 Fase 2: Deploy Azure (Pós-Aprovação)",
            &[
                "Provisionar VM Azure conforme especificações",
                "Configurar backups automatizados",
                "Migrar código e dados para produção",
                "Configurar monitoramento e alertas",
                "Integrar com Power BI",
            ],
        ),
        (
            "7.3 Fase 3: Otimização e Expansão",
            &[
                "Implementar views materializadas para performance",
                "Adicionar novas fontes de dados conforme necessário",
                "Criar dashboards específicos por área",
                "Implementar machine learning para previsões",
            ],
        ),
    ];

    let mut blocks = vec![h1("7. Próximos Passos")];
    for (title, steps) in phases {
        blocks.push(h2(title));
        blocks.extend(steps.iter().map(|step| numbered(step)));
    }
    blocks.push(ContentBlock::PageBreak);
    blocks
}

/// 8. Contatos e Suporte, closing the document
pub fn contacts() -> Vec<ContentBlock> {
    vec![
        h1("8. Contatos e Suporte"),
        label("Equipe de Projetos:", AFTER_LABEL),
        body("Email: projetos@creditsbrasil.com"),
        label("Repositório GitHub:", AFTER_LABEL),
        body("https://github.com/credits-brasil/dw-credits-brasil"),
        spaced(
            12.0,
            vec![
                TextRun::styled("Documentação Técnica Completa", CharacterProperties::new().bold().size(11.0)),
                TextRun::styled(" | Credits Brasil © 2025", CharacterProperties::new().size(10.0).color(MUTED_GRAY)),
            ],
        ),
    ]
}
