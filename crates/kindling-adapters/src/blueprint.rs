//! The built-in starter blueprint.
//!
//! These are the files `kindling new` layers on top of the generator's
//! output, plus the pre-commit hook body. Contents are deliberately small:
//! working examples a team replaces as the project grows.

use kindling_core::domain::{Blueprint, FileStencil, StencilContent};

const CONFIG_JSON: &str = r#"{
  "name": "{{PROJECT_NAME_KEBAB}}",
  "createdBy": "kindling",
  "createdAt": "{{CREATED_DATE}}",
  "conventions": {
    "components": "PascalCase",
    "files": "kebab-case"
  }
}
"#;

const AUTH_TS: &str = r#"// Session helpers for {{PROJECT_NAME_PASCAL}}.
// Replace the in-memory token store with your auth provider of choice.

const SESSION_KEY = "{{PROJECT_NAME_KEBAB}}.session";

export interface Session {
  userId: string;
  token: string;
  expiresAt: number;
}

export function saveSession(session: Session): void {
  window.localStorage.setItem(SESSION_KEY, JSON.stringify(session));
}

export function loadSession(): Session | null {
  const raw = window.localStorage.getItem(SESSION_KEY);
  if (raw === null) return null;
  const session = JSON.parse(raw) as Session;
  return session.expiresAt > Date.now() ? session : null;
}

export function clearSession(): void {
  window.localStorage.removeItem(SESSION_KEY);
}
"#;

const STORE_TS: &str = r#"// Application store for {{PROJECT_NAME_PASCAL}}.

import { create } from "zustand";

import { type Session, loadSession } from "./auth";

interface AppState {
  session: Session | null;
  setSession: (session: Session | null) => void;
}

export const useAppStore = create<AppState>((set) => ({
  session: loadSession(),
  setSession: (session) => set({ session }),
}));
"#;

const VALIDATION_TS: &str = r#"// Shared form schemas for {{PROJECT_NAME_PASCAL}}.

import { z } from "zod";

export const credentialsSchema = z.object({
  email: z.string().email(),
  password: z.string().min(8, "password must be at least 8 characters"),
});

export type Credentials = z.infer<typeof credentialsSchema>;
"#;

const EDITORCONFIG: &str = r#"root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true
indent_style = space
indent_size = 2
"#;

const PRE_COMMIT_HOOK: &str = r#"#!/bin/sh
# Installed by kindling. Checks staged file names before each commit.
# Remove this file to opt out.

kindling check --staged
"#;

/// Build the starter blueprint.
pub fn starter_blueprint() -> Blueprint {
    Blueprint::new("starter")
        .with_stencil(FileStencil::parameterized(
            "kindling.config.json",
            CONFIG_JSON,
        ))
        .with_stencil(FileStencil::parameterized("src/lib/auth.ts", AUTH_TS))
        .with_stencil(FileStencil::parameterized("src/lib/store.ts", STORE_TS))
        .with_stencil(FileStencil::parameterized(
            "src/lib/validation.ts",
            VALIDATION_TS,
        ))
        .with_stencil(FileStencil::literal(".editorconfig", EDITORCONFIG))
        .with_hook_script(StencilContent::Literal(PRE_COMMIT_HOOK.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindling_core::domain::{FileMode, RenderContext, naming};

    #[test]
    fn starter_blueprint_is_valid() {
        starter_blueprint().validate().unwrap();
    }

    #[test]
    fn rendered_files_carry_the_project_name() {
        let ctx = RenderContext::new("my-shop").with_variable("CREATED_DATE", "2026-08-08");
        let files = starter_blueprint().render(&ctx).unwrap();

        let config = files
            .iter()
            .find(|f| f.path.ends_with("kindling.config.json"))
            .unwrap();
        assert!(config.content.contains("\"my-shop\""));
        assert!(config.content.contains("\"2026-08-08\""));
        assert!(!config.content.contains("{{"));

        let auth = files.iter().find(|f| f.path.ends_with("auth.ts")).unwrap();
        assert!(auth.content.contains("MyShop"));
    }

    #[test]
    fn no_rendered_file_is_executable() {
        let files = starter_blueprint()
            .render(&RenderContext::new("my-shop"))
            .unwrap();
        assert!(files.iter().all(|f| f.mode == FileMode::Regular));
    }

    #[test]
    fn hook_invokes_the_checker_and_is_executable() {
        let hook = starter_blueprint()
            .render_hook(&RenderContext::new("my-shop"))
            .unwrap();
        assert!(hook.content.starts_with("#!/bin/sh"));
        assert!(hook.content.contains("kindling check --staged"));
        assert!(hook.mode.is_executable());
    }

    #[test]
    fn blueprint_obeys_its_own_naming_rules() {
        let files = starter_blueprint()
            .render(&RenderContext::new("my-shop"))
            .unwrap();
        let report = naming::check_paths(files.iter().map(|f| f.path.as_path()));
        assert!(report.is_clean(), "violations: {:?}", report.violations);
    }
}
