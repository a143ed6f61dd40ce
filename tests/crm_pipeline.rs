// tests/crm_pipeline.rs
//
// Exercita o funil direto pela API em memória, sem simular tráfego de
// rede: formulário -> serviço -> store -> board.

use anyhow::Result;
use rust_decimal::Decimal;
use uuid::Uuid;

use growth_clinic_hub::forms::LeadIntakeForm;
use growth_clinic_hub::models::crm::{CreateLeadPayload, Stage};
use growth_clinic_hub::services::CrmService;
use growth_clinic_hub::store::LeadStore;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .compact()
        .try_init();
}

fn payload(name: &str, phone: &str, procedure: &str, value: i64) -> CreateLeadPayload {
    CreateLeadPayload {
        name: name.to_string(),
        phone: phone.to_string(),
        procedure: procedure.to_string(),
        value: Decimal::from(value),
    }
}

#[test]
fn add_lead_appends_one_lead_in_the_first_stage() -> Result<()> {
    init_tracing();
    let mut crm = CrmService::new(LeadStore::new());

    let lead = crm.add_lead(&payload("João", "123", "Botox", 800))?;

    assert_eq!(crm.lead_count(), 1);
    assert_eq!(lead.stage, Stage::Interested);
    assert_eq!(lead.name, "João");
    assert_eq!(lead.value, Decimal::from(800));
    Ok(())
}

#[test]
fn add_lead_with_any_empty_required_field_changes_nothing() {
    let mut crm = CrmService::new(LeadStore::with_sample_leads());

    let rejected = [
        payload("", "123", "Botox", 800),
        payload("João", "", "Botox", 800),
        payload("João", "123", "", 800),
    ];

    for bad in rejected {
        assert!(crm.add_lead(&bad).is_err());
        assert_eq!(crm.lead_count(), 3);
    }
}

#[test]
fn add_lead_rejects_negative_value_without_mutating() {
    let mut crm = CrmService::new(LeadStore::new());
    assert!(crm.add_lead(&payload("João", "123", "Botox", -800)).is_err());
    assert_eq!(crm.lead_count(), 0);
}

#[test]
fn advance_moves_exactly_one_step_forward() -> Result<()> {
    let mut crm = CrmService::new(LeadStore::new());
    let lead = crm.add_lead(&payload("João", "123", "Botox", 800))?;

    let expected = [Stage::Scheduled, Stage::Client, Stage::UpsellDone];
    for stage in expected {
        crm.advance_stage(lead.id);
        assert_eq!(crm.leads()[0].stage, stage);
    }
    Ok(())
}

#[test]
fn advance_on_terminal_stage_is_a_noop() -> Result<()> {
    let mut crm = CrmService::new(LeadStore::new());
    let lead = crm.add_lead(&payload("Paula Lima", "456", "Peeling", 300))?;

    for _ in 0..4 {
        crm.advance_stage(lead.id);
    }
    let before = crm.leads()[0].clone();

    crm.advance_stage(lead.id);

    assert_eq!(crm.lead_count(), 1);
    assert_eq!(crm.leads()[0], before);
    assert_eq!(before.stage, Stage::UpsellDone);
    Ok(())
}

#[test]
fn advance_with_unknown_id_is_a_silent_noop() {
    let mut crm = CrmService::new(LeadStore::with_sample_leads());
    let before: Vec<Stage> = crm.leads().iter().map(|l| l.stage).collect();

    crm.advance_stage(Uuid::new_v4());

    let after: Vec<Stage> = crm.leads().iter().map(|l| l.stage).collect();
    assert_eq!(before, after);
    assert_eq!(crm.lead_count(), 3);
}

#[test]
fn stages_partition_the_store_exactly() -> Result<()> {
    let mut crm = CrmService::new(LeadStore::with_sample_leads());
    crm.add_lead(&payload("João", "123", "Botox", 800))?;
    crm.add_lead(&payload("Paula Lima", "456", "Limpeza de Pele", 150))?;

    let total: usize = Stage::ALL
        .iter()
        .map(|&stage| crm.leads_in_stage(stage).len())
        .sum();
    assert_eq!(total, crm.lead_count());

    // Cada lead aparece em exatamente uma coluna: a do próprio estágio.
    for lead in crm.leads() {
        for stage in Stage::ALL {
            let ids: Vec<Uuid> = crm.leads_in_stage(stage).iter().map(|l| l.id).collect();
            assert_eq!(ids.contains(&lead.id), lead.stage == stage);
        }
    }
    Ok(())
}

#[test]
fn leads_in_stage_preserves_insertion_order() -> Result<()> {
    let mut crm = CrmService::new(LeadStore::new());
    crm.add_lead(&payload("Primeira", "1", "Botox", 800))?;
    crm.add_lead(&payload("Segunda", "2", "Peeling", 300))?;
    crm.add_lead(&payload("Terceira", "3", "Botox", 800))?;

    let names: Vec<&str> = crm
        .leads_in_stage(Stage::Interested)
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["Primeira", "Segunda", "Terceira"]);
    Ok(())
}

#[test]
fn stage_totals_sum_the_partition_and_empty_stage_is_zero() {
    let crm = CrmService::new(LeadStore::with_sample_leads());

    assert_eq!(crm.total_value_in_stage(Stage::Interested), Decimal::from(800));
    assert_eq!(crm.total_value_in_stage(Stage::Scheduled), Decimal::from(2000));
    assert_eq!(crm.total_value_in_stage(Stage::Client), Decimal::from(1200));
    assert_eq!(crm.total_value_in_stage(Stage::UpsellDone), Decimal::ZERO);
}

// O cenário da reunião: Maria sai de Interessado e a coluna Agendado
// passa a somar 2800.
#[test]
fn advancing_maria_moves_her_into_scheduled() {
    init_tracing();
    let mut crm = CrmService::new(LeadStore::with_sample_leads());
    let maria_id = crm
        .leads()
        .iter()
        .find(|l| l.name == "Maria Silva")
        .map(|l| l.id)
        .unwrap();

    crm.advance_stage(maria_id);

    assert!(crm.leads_in_stage(Stage::Interested).is_empty());
    let scheduled = crm.leads_in_stage(Stage::Scheduled);
    assert_eq!(scheduled.len(), 2);
    assert_eq!(
        crm.total_value_in_stage(Stage::Scheduled),
        Decimal::from(2800)
    );
}

#[test]
fn intake_form_submit_appends_joao_to_the_funnel() -> Result<()> {
    let mut crm = CrmService::new(LeadStore::with_sample_leads());
    let mut form = LeadIntakeForm::new();

    form.open();
    form.set_name("João");
    form.set_phone("123");
    form.select_procedure("Botox");
    assert_eq!(form.draft().value, Decimal::from(800));

    let lead = form.submit(&mut crm)?;

    assert_eq!(crm.lead_count(), 4);
    assert_eq!(lead.stage, Stage::Interested);
    assert!(!form.is_open());
    assert_eq!(form.draft(), &CreateLeadPayload::default());
    Ok(())
}

#[test]
fn failed_submit_keeps_the_draft_and_the_dialog_open() {
    let mut crm = CrmService::new(LeadStore::new());
    let mut form = LeadIntakeForm::new();

    form.open();
    form.set_name("João");
    form.select_procedure("Botox");
    // Telefone ficou em branco.

    let err = form.submit(&mut crm).unwrap_err();

    assert_eq!(crm.lead_count(), 0);
    assert!(form.is_open());
    assert_eq!(form.draft().name, "João");
    assert_eq!(form.draft().procedure, "Botox");

    let details = err.to_details();
    assert!(details["details"]["phone"][0]
        .as_str()
        .unwrap()
        .contains("obrigatório"));
}

#[test]
fn selecting_an_unknown_procedure_zeroes_the_draft_value() {
    let mut form = LeadIntakeForm::new();

    form.select_procedure("Harmonização Facial");
    assert_eq!(form.draft().value, Decimal::from(2000));

    // O valor sugerido pode ser sobrescrito na mão.
    form.set_value(Decimal::from(1800));
    assert_eq!(form.draft().value, Decimal::from(1800));

    form.select_procedure("Criolipólise");
    assert_eq!(form.draft().value, Decimal::ZERO);
}
