use serde::{Deserialize, Serialize};

/// Every user-visible string the report prints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub title: String,
    pub generated_prefix: String,
    pub company_section: String,
    pub id_label: String,
    pub phone_label: String,
    pub address_label: String,
    pub placeholder: String,
    pub summary_section: String,
    pub products_card: String,
    pub units_card: String,
    pub healthy_card: String,
    pub low_card: String,
    pub distribution_section: String,
    pub healthy_legend: String,
    pub low_legend: String,
    pub depleted_legend: String,
    pub detail_section: String,
    /// Column headers, left to right: index, code, product, quantity, status, price, updated.
    pub columns: [String; 7],
    pub status_healthy: String,
    pub status_low: String,
    pub status_depleted: String,
    pub total_label: String,
    pub empty_message: String,
    pub footer_left: String,
    pub page_prefix: String,
    pub footer_right: String,
    /// Prefix of the suggested download name, e.g. `Inventario_Acme_SA_2026-10-19.pdf`.
    pub file_prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            title: "REPORTE DE INVENTARIO".into(),
            generated_prefix: "Generado:".into(),
            company_section: "INFORMACIÓN DE LA EMPRESA".into(),
            id_label: "NIT:".into(),
            phone_label: "Tel:".into(),
            address_label: "Dirección:".into(),
            placeholder: "N/A".into(),
            summary_section: "RESUMEN DEL INVENTARIO".into(),
            products_card: "Productos".into(),
            units_card: "Unidades".into(),
            healthy_card: "Stock Alto".into(),
            low_card: "Stock Bajo".into(),
            distribution_section: "DISTRIBUCIÓN DEL STOCK".into(),
            healthy_legend: "Stock Alto".into(),
            low_legend: "Stock Bajo".into(),
            depleted_legend: "Sin Stock".into(),
            detail_section: "DETALLE DEL INVENTARIO".into(),
            columns: [
                "#".into(),
                "CÓDIGO".into(),
                "PRODUCTO".into(),
                "CANT.".into(),
                "ESTADO".into(),
                "PRECIO".into(),
                "ACTUALIZACIÓN".into(),
            ],
            status_healthy: "DISPONIBLE".into(),
            status_low: "STOCK BAJO".into(),
            status_depleted: "SIN STOCK".into(),
            total_label: "TOTAL".into(),
            empty_message: "No hay productos registrados en el inventario".into(),
            footer_left: "Sistema de Inventario - Lite Thinking © 2025".into(),
            page_prefix: "Página".into(),
            footer_right: "Documento confidencial".into(),
            file_prefix: "Inventario".into(),
        }
    }
}
