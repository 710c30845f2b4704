//! Text payloads for the four generated component files.

use crate::component::ComponentSpec;

/// `<name>.tsx`: function component bound to the co-located stylesheet.
pub fn component(spec: &ComponentSpec) -> String {
    format!(
        "import React from 'react'\nimport s from './{name}.module.scss'\nexport type {cap}Props = {{}}\n\nexport const {cap}: React.FC<{cap}Props> = ({{}}) => {{\n  return <div className={{s.container}}>{cap}</div>\n}}\n",
        name = spec.name,
        cap = spec.capitalized_name
    )
}

/// `<name>.module.scss`: a single placeholder `.container` rule.
pub fn stylesheet(_spec: &ComponentSpec) -> String {
    ".container {\n  // styles go here\n}".to_string()
}

/// `index.ts` inside the component directory.
pub fn index(spec: &ComponentSpec) -> String {
    crate::index::export_line(&spec.name)
}

/// `<name>.stories.tsx`: storybook metadata plus one default story.
pub fn story(spec: &ComponentSpec) -> String {
    format!(
        "import type {{ Meta, StoryObj }} from '@storybook/react'\nimport {{ {cap} }} from './'\n\nconst meta = {{\n  component: {cap},\n  tags: ['autodocs'],\n  title: 'Components/{cap}',\n}} satisfies Meta<typeof {cap}>\n\nexport default meta\ntype Story = StoryObj<typeof meta>\n\nexport const Default: Story = {{\n  args: {{}},\n}}\n",
        cap = spec.capitalized_name
    )
}
