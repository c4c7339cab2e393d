use super::activity::Activity;
use super::client::Client;
use super::examination::Examination;
use super::product::Product;
use super::recipe::Recipe;
use crate::db::encode::{DATETIME_FORMAT, DATE_FORMAT};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn clients(clients: &[Client]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FULL NAME", "BIRTH DATE", "GENDER", "AGE", "PHONE"]);
        for client in clients {
            table.add_row(row![
                client.id.unwrap_or(0),
                client.full_name(),
                client.birth_date.format(DATE_FORMAT),
                client.gender,
                client.age,
                client.tel_number
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// One row per examination; form fields are folded into a single
    /// `name: value` column, blank ones skipped.
    pub fn examinations(examinations: &[Examination]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CLIENT", "FULL", "DATE", "FIELDS"]);
        for examination in examinations {
            let fields = examination
                .fields
                .iter()
                .filter(|field| !field.is_blank())
                .map(|field| format!("{}: {}", field.name, field.value))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(row![
                examination.id.unwrap_or(0),
                examination.client_id,
                if examination.is_full_examination { "yes" } else { "no" },
                examination.date.format(DATETIME_FORMAT),
                fields
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn products(products: &[Product]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PROTEINS", "FATS", "CARBS", "KCAL", "UNITS"]);
        for product in products {
            table.add_row(row![
                product.id.unwrap_or(0),
                product.name,
                format!("{:.1}", product.proteins),
                format!("{:.1}", product.fats),
                format!("{:.1}", product.carbohydrates),
                format!("{:.1}", product.kilocalories),
                product.units.label()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn recipes(recipes: &[Recipe]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "INGREDIENTS", "STEPS", "KCAL"]);
        for recipe in recipes {
            let ingredients = recipe
                .products
                .iter()
                .map(|weighted| format!("{} {} {}", weighted.product.name, weighted.amount, weighted.product.units.label()))
                .collect::<Vec<_>>()
                .join("\n");
            let steps = recipe
                .cooking_points
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(row![
                recipe.id.unwrap_or(0),
                recipe.name,
                ingredients,
                steps,
                format!("{:.1}", recipe.total_kilocalories())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TYPE", "KCAL/KG/MIN"]);
        for activity in activities {
            table.add_row(row![activity.id.unwrap_or(0), activity.kind, format!("{:.3}", activity.kkal_per_kg_min)]);
        }
        table.printstd();

        Ok(())
    }

    /// Numbered list of drained store errors.
    pub fn errors(errors: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ERROR"]);
        for (i, error) in errors.iter().enumerate() {
            table.add_row(row![i + 1, error]);
        }
        table.printstd();

        Ok(())
    }
}
