// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Resume builder document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Bullet points
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    /// Relevant coursework
    #[serde(default)]
    pub relevant: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroups {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// The whole resume. Edited section by section; never rewarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<ResumeProject>,
    pub skills: SkillGroups,
    pub achievements: Vec<String>,
}

/// Replacement value for one resume section.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeSection {
    PersonalInfo(PersonalInfo),
    Summary(String),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Projects(Vec<ResumeProject>),
    Skills(SkillGroups),
    Achievements(Vec<String>),
}

impl Resume {
    pub(crate) fn replace_section(&mut self, section: ResumeSection) {
        match section {
            ResumeSection::PersonalInfo(info) => self.personal_info = info,
            ResumeSection::Summary(summary) => self.summary = summary,
            ResumeSection::Experience(items) => self.experience = items,
            ResumeSection::Education(items) => self.education = items,
            ResumeSection::Projects(items) => self.projects = items,
            ResumeSection::Skills(groups) => self.skills = groups,
            ResumeSection::Achievements(items) => self.achievements = items,
        }
    }
}
